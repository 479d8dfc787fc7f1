//! The reference dataset: 100 people with an id, a name, an age and an account status.
//!
//! Used by the demo page, the documentation examples, the integration tests and the benchmarks.

use crate::columns::ColumnDescriptor;
use crate::config::TableOptions;
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Page sizes offered by the reference table.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

const PEOPLE: [(i64, &str, i64, &str); 100] = [
    (1, "John", 25, "Active"),
    (2, "Jane", 30, "Inactive"),
    (3, "Alice", 28, "Active"),
    (4, "Bob", 32, "Inactive"),
    (5, "Charlie", 22, "Active"),
    (6, "David", 27, "Active"),
    (7, "Eva", 29, "Inactive"),
    (8, "Frank", 24, "Active"),
    (9, "Grace", 26, "Inactive"),
    (10, "Hannah", 31, "Active"),
    (11, "Ian", 23, "Active"),
    (12, "Jill", 34, "Inactive"),
    (13, "Kevin", 29, "Active"),
    (14, "Laura", 27, "Inactive"),
    (15, "Mike", 33, "Active"),
    (16, "Nina", 28, "Inactive"),
    (17, "Oscar", 26, "Active"),
    (18, "Pam", 25, "Inactive"),
    (19, "Quinn", 30, "Active"),
    (20, "Rachel", 32, "Inactive"),
    (21, "Sam", 27, "Active"),
    (22, "Tina", 24, "Inactive"),
    (23, "Uma", 26, "Active"),
    (24, "Victor", 31, "Inactive"),
    (25, "Wendy", 29, "Active"),
    (26, "Xander", 28, "Inactive"),
    (27, "Yvonne", 27, "Active"),
    (28, "Zach", 33, "Inactive"),
    (29, "Aaron", 22, "Active"),
    (30, "Betty", 30, "Inactive"),
    (31, "Carl", 25, "Active"),
    (32, "Diana", 31, "Inactive"),
    (33, "Ethan", 27, "Active"),
    (34, "Fiona", 24, "Inactive"),
    (35, "George", 28, "Active"),
    (36, "Helen", 29, "Inactive"),
    (37, "Isaac", 26, "Active"),
    (38, "Jasmine", 32, "Inactive"),
    (39, "Kyle", 23, "Active"),
    (40, "Lily", 25, "Inactive"),
    (41, "Mark", 30, "Active"),
    (42, "Nora", 27, "Inactive"),
    (43, "Owen", 28, "Active"),
    (44, "Paula", 29, "Inactive"),
    (45, "Quincy", 31, "Active"),
    (46, "Rita", 26, "Inactive"),
    (47, "Steve", 24, "Active"),
    (48, "Tara", 30, "Inactive"),
    (49, "Ulysses", 28, "Active"),
    (50, "Violet", 27, "Inactive"),
    (51, "Walter", 29, "Active"),
    (52, "Xenia", 25, "Inactive"),
    (53, "Yosef", 31, "Active"),
    (54, "Zara", 26, "Inactive"),
    (55, "Adam", 24, "Active"),
    (56, "Bella", 27, "Inactive"),
    (57, "Cody", 29, "Active"),
    (58, "Daisy", 30, "Inactive"),
    (59, "Eli", 28, "Active"),
    (60, "Faith", 26, "Inactive"),
    (61, "Gavin", 25, "Active"),
    (62, "Hailey", 31, "Inactive"),
    (63, "Ian", 29, "Active"),
    (64, "Jenna", 27, "Inactive"),
    (65, "Karl", 24, "Active"),
    (66, "Laura", 28, "Inactive"),
    (67, "Miles", 26, "Active"),
    (68, "Nina", 30, "Inactive"),
    (69, "Omar", 29, "Active"),
    (70, "Penny", 25, "Inactive"),
    (71, "Quentin", 31, "Active"),
    (72, "Ralph", 27, "Inactive"),
    (73, "Sophie", 28, "Active"),
    (74, "Trent", 29, "Inactive"),
    (75, "Ursula", 26, "Active"),
    (76, "Vince", 24, "Inactive"),
    (77, "Wanda", 30, "Active"),
    (78, "Xander", 28, "Inactive"),
    (79, "Yara", 27, "Active"),
    (80, "Zane", 31, "Inactive"),
    (81, "Alan", 29, "Active"),
    (82, "Bianca", 25, "Inactive"),
    (83, "Caleb", 30, "Active"),
    (84, "Diana", 27, "Inactive"),
    (85, "Ethan", 28, "Active"),
    (86, "Felicity", 29, "Inactive"),
    (87, "George", 26, "Active"),
    (88, "Hazel", 24, "Inactive"),
    (89, "Isaac", 31, "Active"),
    (90, "Jade", 27, "Inactive"),
    (91, "Kevin", 28, "Active"),
    (92, "Lana", 29, "Inactive"),
    (93, "Mason", 26, "Active"),
    (94, "Nora", 24, "Inactive"),
    (95, "Owen", 31, "Active"),
    (96, "Paige", 27, "Inactive"),
    (97, "Quinn", 28, "Active"),
    (98, "Riley", 29, "Inactive"),
    (99, "Sophia", 26, "Active"),
    (100, "Tyler", 24, "Inactive"),
];

/// Schema of [`people`]: `id`, `name`, `age`, `status`.
pub fn people_schema() -> Schema {
    Schema::new(vec![
        Field::new("id", DataType::Int64),
        Field::new("name", DataType::Utf8),
        Field::new("age", DataType::Int64),
        Field::new("status", DataType::Utf8),
    ])
}

/// The 100-record reference dataset, ordered by id.
pub fn people() -> DataSet {
    let rows = PEOPLE
        .iter()
        .map(|&(id, name, age, status)| {
            vec![
                Value::Int64(id),
                Value::from(name),
                Value::Int64(age),
                Value::from(status),
            ]
        })
        .collect();
    DataSet::new(people_schema(), rows)
}

/// The reference columns; every column is filterable.
pub fn people_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("id", "ID").filterable(true),
        ColumnDescriptor::new("name", "Name").filterable(true),
        ColumnDescriptor::new("age", "Age").filterable(true),
        ColumnDescriptor::new("status", "Status").filterable(true),
    ]
}

/// Options of the reference table: page sizes 5, 10 and 25.
pub fn people_options() -> TableOptions {
    TableOptions::with_page_sizes(PAGE_SIZE_OPTIONS)
}
