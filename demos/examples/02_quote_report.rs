use bundlequote::{QuoteDesk, QuoteWarning, TopicDemand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // `provider_list` is not a string and is skipped; `provider_gap` has an
    // empty segment that never matches, but its other topics still quote.
    let desk = QuoteDesk::builder()
        .catalog_json(
            r#"{"provider_topics": {
                "provider_a": "math+science",
                "provider_list": ["math", "science"],
                "provider_gap": "math++science",
                "provider_c": "reading"
            }}"#,
        )
        .build()?;
    let demand = TopicDemand::from_pairs([("math", 50), ("science", 30), ("reading", 20)])?;

    let report = desk.quote_report(&demand);
    for quote in &report.quotes {
        println!("quote    {} {}", quote.provider, quote.price);
    }
    for warning in &report.warnings {
        match warning {
            QuoteWarning::ProviderSkipped { provider, reason } => {
                println!("skipped  {provider}: {reason}");
            }
            QuoteWarning::EmptyTopicName { provider } => {
                println!("flagged  {provider}: empty topic name");
            }
            other => println!("warning  {other:?}"),
        }
    }

    Ok(())
}
