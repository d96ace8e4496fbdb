//! Print the full derivation of a 3x3 inverse without touching disk
//!
//!   cargo run -p msolve --example step_trace

use msolve::render::{render_steps, render_value};
use msolve::{parse_matrix, Config, MemoryStore, Operation, Session};

fn main() -> msolve::Result<()> {
    let mut session = Session::new(MemoryStore::new(), Config::default())?;
    let a = parse_matrix("1,2,3;4,5,6;7,8,10")?;

    for op in [Operation::Determinant, Operation::Inverse] {
        let outcome = session.run(op, &a, None)?;
        println!("{}\n", render_steps(&outcome.steps));
        println!("{} = \n{}\n", op.name(), render_value(&outcome.result));
    }

    println!("{} entries recorded", session.history().entries().len());
    Ok(())
}
