use std::sync::Arc;

use bundlequote_demos::common::desk;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let desk = Arc::new(desk()?);

    // Untyped bodies as a transport would hand them over; the second is rejected.
    let bodies = vec![
        json!({"topics": {"math": 50, "science": 30, "reading": 20}}),
        json!({"topics": {"math": -1}}),
        json!({"topics": {"reading": 80, "science": 60}}),
    ];

    // The desk is read-only, so requests can be answered from several tasks.
    let mut handles = Vec::new();
    for body in bodies {
        let desk = Arc::clone(&desk);
        handles.push(tokio::spawn(async move { desk.quote_json(&body) }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        match handle.await? {
            Ok(quotes) => println!("request {i}: {}", serde_json::to_string(&quotes)?),
            Err(err) => println!("request {i}: rejected ({err})"),
        }
    }

    Ok(())
}
