use bundlequote_demos::common::{desk, sample_demand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load the provider catalog (BUNDLEQUOTE_CATALOG or the bundled file).
    let desk = desk()?;

    // 2. The requester's topic weights; only the top three take part.
    let demand = sample_demand()?;

    // 3. Quote every provider and print the matches.
    for quote in desk.quote(&demand) {
        println!("{:<12} {}", quote.provider, quote.price);
    }

    Ok(())
}
