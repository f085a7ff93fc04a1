//! Basic example of using the percolation model directly.

use percolation_core::Percolation;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a 5x5 grid and open a winding path from top to bottom
    let mut grid = Percolation::new(5)?;
    for (row, col) in [(1, 2), (2, 2), (2, 3), (3, 3), (4, 3), (4, 4), (5, 4)] {
        grid.open(row, col)?;
    }

    println!("Grid after opening a path:");
    println!("{}", grid);

    println!("Open sites: {}", grid.open_sites());
    println!("Percolates: {}", grid.percolates());

    // A site on the path is full; an open site cut off from the top is not
    println!("(3, 3) full: {}", grid.is_full(3, 3)?);
    grid.open(3, 1)?;
    println!("(3, 1) full: {}", grid.is_full(3, 1)?);

    // Coordinates are validated
    if let Err(e) = grid.open(0, 9) {
        println!("Rejected: {}", e);
    }

    Ok(())
}
