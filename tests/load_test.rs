//! Load testing for the benchmark server.

use std::time::Instant;

use authbench::BenchConfig;
use axum::http::StatusCode;

mod common;

#[tokio::test]
async fn test_auth_load_performance() {
    let (addr, shutdown) = common::spawn_server(BenchConfig::default()).await;
    let client = common::client();

    client
        .get(format!("http://{addr}/newUser"))
        .query(&[("username", "matt"), ("password", "password")])
        .send()
        .await
        .unwrap();

    let concurrency = 20;
    let requests_per_task = 50;
    let total_requests = concurrency * requests_per_task;

    let start = Instant::now();

    let mut tasks = Vec::new();
    for _ in 0..concurrency {
        let client = client.clone();
        let url = format!("http://{addr}/auth?username=matt&password=password");
        tasks.push(tokio::spawn(async move {
            let mut latencies = Vec::new();
            for _ in 0..requests_per_task {
                let req_start = Instant::now();
                if let Ok(res) = client.get(&url).send().await {
                    if res.status().is_success() {
                        latencies.push(req_start.elapsed());
                    }
                }
            }
            latencies
        }));
    }

    let mut all_latencies = Vec::new();
    for task in tasks {
        all_latencies.extend(task.await.unwrap());
    }

    let duration = start.elapsed();
    let rps = total_requests as f64 / duration.as_secs_f64();

    assert_eq!(
        all_latencies.len(),
        total_requests,
        "every authentication should succeed"
    );

    all_latencies.sort();
    let p50 = all_latencies[all_latencies.len() / 2];
    let p95 = all_latencies[(all_latencies.len() as f64 * 0.95) as usize];
    let p99 = all_latencies[(all_latencies.len() as f64 * 0.99) as usize];

    println!("\n--- Load Test Results ---");
    println!("Total Requests: {}", total_requests);
    println!("Concurrency:    {}", concurrency);
    println!("Total Duration: {:?}", duration);
    println!("Requests/sec:   {:.2}", rps);
    println!("P50 Latency:    {:?}", p50);
    println!("P95 Latency:    {:?}", p95);
    println!("P99 Latency:    {:?}", p99);
    println!("-------------------------\n");

    // The counter is best-effort under concurrency but every successful
    // authentication increments it exactly once, so the next count is
    // total + 1.
    let res = client
        .get(format!("http://{addr}/auth"))
        .query(&[("username", "matt"), ("password", "password")])
        .send()
        .await
        .unwrap();
    let body = res.text().await.unwrap();
    let count: usize = body
        .split_whitespace()
        .next()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(count, total_requests + 1);

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_registration_single_winner() {
    let (addr, shutdown) = common::spawn_server(BenchConfig::default()).await;
    let client = common::client();

    let concurrency = 20;
    let mut tasks = Vec::new();
    for _ in 0..concurrency {
        let client = client.clone();
        let url = format!("http://{addr}/newUser?username=highlander&password=pw");
        tasks.push(tokio::spawn(async move {
            client.get(&url).send().await.unwrap().status()
        }));
    }

    let mut created = 0;
    let mut rejected = 0;
    for task in tasks {
        let status = task.await.unwrap();
        if status == StatusCode::OK {
            created += 1;
        } else if status == StatusCode::BAD_REQUEST {
            rejected += 1;
        } else {
            panic!("unexpected status {status}");
        }
    }

    assert_eq!(created, 1, "exactly one registration wins");
    assert_eq!(rejected, concurrency - 1);

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_distinct_registrations_all_succeed() {
    let (addr, shutdown) = common::spawn_server(BenchConfig::default()).await;
    let client = common::client();

    let concurrency = 20;
    let mut tasks = Vec::new();
    for i in 0..concurrency {
        let client = client.clone();
        let url = format!("http://{addr}/newUser?username=user{i}&password=pw{i}");
        tasks.push(tokio::spawn(async move {
            client.get(&url).send().await.unwrap().status()
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }

    // Every registered user is subsequently authenticable.
    for i in 0..concurrency {
        let res = client
            .get(format!("http://{addr}/auth"))
            .query(&[("username", format!("user{i}")), ("password", format!("pw{i}"))])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    shutdown.trigger();
}
