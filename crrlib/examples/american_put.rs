//! Prices a one-year American put (K = 110) on a 3-step CRR tree and dumps
//! the option-value lattice to the terminal.

use crrlib::core::Result;
use crrlib::engine::PricingEngine;
use crrlib::instruments::{ExerciseStyle, OptionContract, OptionType};

fn main() -> Result<()> {
    let contract = OptionContract::vanilla(OptionType::Put, 110.0, 1.0, ExerciseStyle::American)?;
    let engine = PricingEngine::new(contract, 0.2, 100.0, 0.05, 3)?;
    let tree = engine.build_tree()?;

    println!("{}", engine.contract());
    println!("{}", tree.values());
    println!("fair price: {:.6}", tree.root_price());
    Ok(())
}
