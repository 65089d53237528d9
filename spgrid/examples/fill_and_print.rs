//! Demonstration driver: fill the two diagonals of an n-by-n grid, print
//! the stored-cell count, print the interior sub-block and list every
//! stored cell.

use clap::Parser;

use spgrid::{Block, CellList, CsrGrid, MapGrid, SparseGrid};

#[derive(Parser, Debug)]
#[command(about = "Sparse grid demonstration")]
struct Args {
    /// Side length of the filled square
    #[arg(long, default_value_t = 9)]
    size: usize,

    /// Use the nested-map form instead of the compressed form
    #[arg(long)]
    map: bool,
}

fn run<G>(mut grid: G, n: usize)
where
    G: SparseGrid<Value = i16>,
{
    for i in 0..n {
        grid.at_mut(i).cell(i).write(i as i16 + 1);
        grid.at_mut(i).cell(n - 1 - i).write((n - i) as i16);
    }

    println!("====== stored cells ======");
    println!("{}", grid.len());

    if n > 2 {
        println!("====== interior block ======");
        print!("{}", Block::new(&grid, 1..n - 1, 1..n - 1));
    }

    println!("====== cell listing ======");
    print!("{}", CellList::new(&grid));
}

fn main() {
    let args = Args::parse();
    if args.map {
        run(MapGrid::new(-1), args.size);
    } else {
        run(CsrGrid::new(-1), args.size);
    }
}
