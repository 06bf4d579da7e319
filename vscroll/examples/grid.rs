// Example: an auto-width photo grid following container resizes.
use vscroll::{ColumnWidth, GridOptions, VirtualGrid};

fn main() {
    let photos: Vec<String> = (0..10_000).map(|i| format!("photo-{i}.jpg")).collect();

    let options = GridOptions::new(4, 180.0)
        .with_gap(12.0)
        .with_column_width(ColumnWidth::Auto);
    let mut grid = VirtualGrid::new(options);
    grid.on_resize(1_000.0, 720.0);
    grid.on_scroll(9_000.0, 0);

    let frame = grid.render(&photos);
    println!(
        "rows={} column_width={} total_height={}",
        frame.layout.row_count, frame.layout.column_width, frame.total_height
    );
    for cell in frame.cells.iter().take(4) {
        println!("{} -> {:?}", cell.data, cell.rect());
    }

    // Narrower window: columns shrink, rows stay put.
    grid.on_resize(640.0, 720.0);
    let frame = grid.render(&photos);
    println!(
        "after resize: column_width={} first={:?}",
        frame.layout.column_width,
        frame.cells.first().map(|c| c.rect())
    );
}
