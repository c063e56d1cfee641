use loadpack::problem::vehicle_catalog::catalog;

use crate::table;

pub fn run() {
    println!("{}", table::vehicles_table(&catalog()));
}
