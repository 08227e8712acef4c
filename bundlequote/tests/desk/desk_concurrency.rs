use std::sync::Arc;

use crate::helpers::{by_provider, demand, desk};
use rust_decimal::Decimal;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_do_not_interfere() {
    let desk = Arc::new(desk(&[
        ("provider_a", "math+science"),
        ("provider_b", "science+reading"),
        ("provider_c", "reading"),
    ]));

    let tasks = (0u64..32).map(|i| {
        let desk = Arc::clone(&desk);
        tokio::spawn(async move {
            let weight = 10 + i;
            let quotes = desk.quote(&demand(&[
                ("math", weight * 3),
                ("science", weight * 2),
                ("reading", weight),
            ]));
            (weight, by_provider(&quotes))
        })
    });

    let results = futures::future::join_all(tasks).await;
    assert_eq!(results.len(), 32);
    for joined in results {
        let (weight, prices) = joined.expect("task panicked");
        let w = Decimal::from(weight);
        assert_eq!(prices["provider_a"], w * Decimal::new(5, 1));
        assert_eq!(prices["provider_b"], w * Decimal::new(3, 1));
        assert_eq!(prices["provider_c"], w * Decimal::new(3, 1));
    }
}
