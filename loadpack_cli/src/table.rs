use comfy_table::{Cell, Color, Table, presets::UTF8_FULL};
use loadpack::{
    problem::vehicle_profile::VehicleProfile,
    solver::{
        comparison::VehicleComparison,
        solution::{
            packed_bin::{PackedBin, UtilizationLevel},
            packing_solution::PackingSolution,
        },
    },
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table
}

fn level_color(level: UtilizationLevel) -> Color {
    match level {
        UtilizationLevel::Normal => Color::Green,
        UtilizationLevel::High => Color::Yellow,
        UtilizationLevel::Critical => Color::Red,
    }
}

fn percentage_cell(percentage: f64, precision: u32) -> Cell {
    Cell::new(format!("{:.*} %", precision as usize, percentage))
        .fg(level_color(UtilizationLevel::from_percentage(percentage)))
}

pub fn summary_table(solution: &PackingSolution) -> Table {
    let vehicle = solution.vehicle();
    let mut table = new_table();
    table
        .set_header(vec!["Vehicle", "Capacity", "Units", "Bins", "Lower bound"])
        .add_row(vec![
            vehicle.name().to_owned(),
            vehicle.capacity().to_string(),
            solution.total_units().to_string(),
            solution.total_bins().to_string(),
            solution.lower_bound_bins().to_string(),
        ]);
    table
}

pub fn bin_table(bin: &PackedBin, vehicle: &VehicleProfile, precision: u32) -> Table {
    let remaining = bin.remaining_capacity(&vehicle.capacity());
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(format!("{} #{}", vehicle.name(), bin.number())),
        Cell::new("Weight"),
        Cell::new("Volume"),
    ]);
    table.add_row(vec![
        Cell::new("Load"),
        Cell::new(format!("{} kg", bin.total_weight())),
        Cell::new(format!("{} m³", bin.total_volume())),
    ]);
    table.add_row(vec![
        Cell::new("Utilization"),
        percentage_cell(bin.weight_utilization(), precision),
        percentage_cell(bin.volume_utilization(), precision),
    ]);
    table.add_row(vec![
        Cell::new("Remaining"),
        Cell::new(format!("{} kg", remaining.weight)),
        Cell::new(format!("{} m³", remaining.volume)),
    ]);
    for row in bin.unit_counts() {
        table.add_row(vec![
            Cell::new(format!("{} ({})", row.name, row.load_id)),
            Cell::new(format!("x{}", row.count)),
            Cell::new(""),
        ]);
    }
    table
}

pub fn comparison_table(comparisons: &[VehicleComparison]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Vehicle", "Capacity", "Bins", "Lower bound", "Result"]);

    for comparison in comparisons {
        let vehicle = &comparison.vehicle;
        match &comparison.result {
            Ok(solution) => table.add_row(vec![
                Cell::new(vehicle.name()),
                Cell::new(vehicle.capacity()),
                Cell::new(solution.total_bins()),
                Cell::new(solution.lower_bound_bins()),
                Cell::new(if solution.is_proven_optimal() {
                    "optimal"
                } else {
                    "heuristic"
                }),
            ]),
            Err(error) => table.add_row(vec![
                Cell::new(vehicle.name()),
                Cell::new(vehicle.capacity()),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new(error).fg(Color::Red),
            ]),
        };
    }

    table
}

pub fn vehicles_table(vehicles: &[VehicleProfile]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Id", "Name", "Max weight", "Max volume"]);
    for vehicle in vehicles {
        table.add_row(vec![
            vehicle.id().to_owned(),
            vehicle.name().to_owned(),
            format!("{} kg", vehicle.max_weight()),
            format!("{} m³", vehicle.max_volume()),
        ]);
    }
    table
}
