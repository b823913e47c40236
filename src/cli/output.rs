use azureedl::{AddressFamily, WrittenFile};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Written Files Summary Table
--------------------------------------------------------------------------------------*/

pub fn summary_table(written: &[WrittenFile]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Service Tag")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("IPv4")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("IPv6")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Total")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);

    // The renderer writes three files per tag (combined, v4, v6), in render order
    for tag_files in written.chunks(3) {
        let lines_for = |family: AddressFamily| {
            tag_files
                .iter()
                .find(|file| file.family == family)
                .map(|file| file.lines)
                .unwrap_or(0)
        };

        table.add_row(vec![
            Cell::new(&tag_files[0].tag_name).add_attribute(Attribute::Bold),
            Cell::new(lines_for(AddressFamily::IPv4)),
            Cell::new(lines_for(AddressFamily::IPv6)),
            Cell::new(lines_for(AddressFamily::Combined)),
        ]);
    }

    // Right-align the count columns
    for column_index in 1..=3 {
        let column = table.column_mut(column_index).expect("The column exists");
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{table}");
}
