//! Integration tests against a live Redis.
//!
//! Disabled unless `REDIS_CONTAINERS_TEST_HOST` points at a disposable
//! server (port via `REDIS_CONTAINERS_TEST_PORT`, default 6379). Every test
//! clears its own keys up front, so reruns are stable; even so, do not aim
//! this at a shared instance. The Bloom-filter test additionally needs the
//! RedisBloom module and skips itself when the module is missing.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use redis_containers::client::structs::redis_client::RedisClient;
use redis_containers::config::structs::redis_client_config::RedisClientConfig;
use redis_containers::containers::enums::retention_policy::RetentionPolicy;
use redis_containers::containers::structs::fifo_group_cache::FifoGroupCache;
use redis_containers::containers::structs::redis_dict::RedisDict;
use redis_containers::containers::structs::redis_sorted_set::RedisSortedSet;
use redis_containers::containers::structs::timeline_group_cache::TimelineGroupCache;
use redis_containers::geo::enums::geo_sort::GeoSort;
use redis_containers::geo::enums::geo_unit::GeoUnit;
use redis_containers::geo::structs::geo_index::GeoIndex;
use redis_containers::limiter::structs::rate_limiter::RateLimiter;
use redis_containers::probabilistic::structs::bloom_filter::BloomFilter;
use redis_containers::probabilistic::structs::hyper_log_log::HyperLogLog;

async fn test_client() -> Option<RedisClient> {
    let host = std::env::var("REDIS_CONTAINERS_TEST_HOST").ok()?;
    let port = std::env::var("REDIS_CONTAINERS_TEST_PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(6379);
    let config = RedisClientConfig {
        host,
        port,
        ..RedisClientConfig::default()
    };
    let client = RedisClient::new(config).expect("client construction is infallible on a valid config");
    client.ping().await.expect("test Redis is configured but unreachable");
    Some(client)
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
struct Footprint {
    a: Vec<serde_json::Value>,
}

#[tokio::test]
async fn test_packed_string_roundtrip() {
    let Some(client) = test_client().await else { return };
    client.delete(&["rc_test:packed:s"]).await.unwrap();

    let value = vec!["walk".to_string(), "eat".to_string()];
    client.set_packed("rc_test:packed:s", &value).await.unwrap();
    let loaded: Option<Vec<String>> = client.get_packed("rc_test:packed:s").await.unwrap();
    assert_eq!(loaded, Some(value));

    let absent: Option<Vec<String>> = client.get_packed("rc_test:packed:absent").await.unwrap();
    assert_eq!(absent, None);
}

#[tokio::test]
async fn test_packed_hash_roundtrip_of_nested_structure() {
    let Some(client) = test_client().await else { return };
    client.delete(&["rc_test:packed:h"]).await.unwrap();

    // {"a": [1, 2, {"b": 3}]}
    let value = Footprint {
        a: vec![
            serde_json::json!(1),
            serde_json::json!(2),
            serde_json::json!({"b": 3}),
        ],
    };
    client.hset_packed("rc_test:packed:h", "f", &value).await.unwrap();
    let loaded: Option<Footprint> = client.hget_packed("rc_test:packed:h", "f").await.unwrap();
    assert_eq!(loaded, Some(value));
}

#[tokio::test]
async fn test_unlink_and_sync_delete() {
    let Some(client) = test_client().await else { return };
    client.set("rc_test:del:a", "1").await.unwrap();
    client.set("rc_test:del:b", "1").await.unwrap();
    assert_eq!(client.delete(&["rc_test:del:a"]).await.unwrap(), 1);
    assert_eq!(client.delete_sync(&["rc_test:del:b"]).await.unwrap(), 1);
    assert!(!client.exists("rc_test:del:a").await.unwrap());
    assert!(!client.exists("rc_test:del:b").await.unwrap());
}

#[tokio::test]
async fn test_geo_nearby_query() {
    let Some(client) = test_client().await else { return };
    let index = GeoIndex::new(client, "rc_test_nearby");
    index.clear().await.unwrap();

    index
        .add(&[(116.1, 40.1, "A"), (116.9, 40.9, "B")])
        .await
        .unwrap();

    // B sits more than 80 km out, so a 15 km radius sees only A.
    let nearby = index
        .radius_search(116.1, 40.1, 15.0, GeoUnit::km, None, None)
        .await
        .unwrap();
    assert_eq!(nearby, vec!["A".to_string()]);

    let distance = index.distance("A", "B", GeoUnit::km).await.unwrap().unwrap();
    assert!((100.0..120.0).contains(&distance), "A-B distance was {}", distance);

    // Unit scaling is consistent against one underlying distance.
    let meters = index.distance("A", "B", GeoUnit::m).await.unwrap().unwrap();
    assert!((meters / 1000.0 - distance).abs() < 1e-3);

    let positions = index.position(&["A", "missing"]).await.unwrap();
    assert!(positions[0].is_some());
    let (lon, lat) = positions[0].unwrap();
    assert!((lon - 116.1).abs() < 1e-4 && (lat - 40.1).abs() < 1e-4);
    assert!(positions[1].is_none());
}

#[tokio::test]
async fn test_geo_radius_sort_is_ordered() {
    let Some(client) = test_client().await else { return };
    let index = GeoIndex::new(client, "rc_test_sorted");
    index.clear().await.unwrap();

    index
        .add(&[
            (116.10, 40.10, "near"),
            (116.20, 40.10, "mid"),
            (116.40, 40.10, "far"),
        ])
        .await
        .unwrap();

    let ascending = index
        .radius_search_with_distance(116.1, 40.1, 200.0, GeoUnit::km, None, Some(GeoSort::Ascending))
        .await
        .unwrap();
    assert_eq!(ascending.len(), 3);
    assert!(ascending.windows(2).all(|pair| pair[0].1 <= pair[1].1));
    assert_eq!(ascending[0].0, "near");

    let descending = index
        .radius_search_with_distance(116.1, 40.1, 200.0, GeoUnit::km, Some(2), Some(GeoSort::Descending))
        .await
        .unwrap();
    assert_eq!(descending.len(), 2);
    assert!(descending[0].1 >= descending[1].1);
    assert_eq!(descending[0].0, "far");
}

#[tokio::test]
async fn test_rate_limiter_burst_then_drain() {
    let Some(client) = test_client().await else { return };
    let limiter = RateLimiter::new(client, "rc_test:burst", 5, "5/1s").unwrap();
    limiter.reset().await.unwrap();

    for call in 0..5 {
        let decision = limiter.acquire(1).await.unwrap();
        assert!(decision.admitted, "call {} should be admitted", call);
    }
    let denied = limiter.acquire(1).await.unwrap();
    assert!(!denied.admitted);
    assert!(denied.wait_seconds > 0.0);

    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let refilled = limiter.acquire(1).await.unwrap();
    assert!(refilled.admitted);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_rate_limiter_never_overdraws_under_contention() {
    let Some(client) = test_client().await else { return };
    // Refill of 10 tokens per day is negligible over the test's lifetime.
    let limiter = Arc::new(RateLimiter::new(client, "rc_test:contended", 10, "10/d").unwrap());
    limiter.reset().await.unwrap();

    let admitted = Arc::new(AtomicU64::new(0));
    let mut tasks = Vec::new();
    for _ in 0..25 {
        let limiter = limiter.clone();
        let admitted = admitted.clone();
        tasks.push(tokio::spawn(async move {
            if limiter.acquire(1).await.unwrap().admitted {
                admitted.fetch_add(1, Ordering::SeqCst);
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }
    assert_eq!(admitted.load(Ordering::SeqCst), 10);
}

#[tokio::test]
async fn test_hyper_log_log_count_within_error_bound() {
    let Some(client) = test_client().await else { return };
    let hll = HyperLogLog::new(client.clone(), "rc_test:hll:a");
    hll.clear().await.unwrap();

    let distinct: u64 = 10_000;
    let items: Vec<String> = (0..distinct).map(|i| format!("visitor-{}", i)).collect();
    for chunk in items.chunks(500) {
        hll.record(chunk.to_vec()).await.unwrap();
    }

    let estimate = hll.count().await.unwrap() as f64;
    let error = (estimate - distinct as f64).abs() / distinct as f64;
    // 5x the documented 0.81% standard error.
    assert!(error < 0.05, "estimate {} off by {:.2}%", estimate, error * 100.0);
}

#[tokio::test]
async fn test_hyper_log_log_merged_count_leaves_sources_untouched() {
    let Some(client) = test_client().await else { return };
    let first = HyperLogLog::new(client.clone(), "rc_test:hll:m1");
    let second = HyperLogLog::new(client.clone(), "rc_test:hll:m2");
    first.clear().await.unwrap();
    second.clear().await.unwrap();

    first.record(vec!["a", "b", "c"]).await.unwrap();
    second.record(vec!["c", "d"]).await.unwrap();

    let union = first
        .merged_count(&["rc_test:hll:m1", "rc_test:hll:m2"])
        .await
        .unwrap();
    assert_eq!(union, 4);
    // Small cardinalities are exact in practice; the sources keep theirs.
    assert_eq!(first.count().await.unwrap(), 3);
    assert_eq!(second.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_bloom_filter_has_no_false_negatives() {
    let Some(client) = test_client().await else { return };
    client.delete(&["rc_test:bloom"]).await.unwrap();
    let filter = match BloomFilter::create(client.clone(), "rc_test:bloom", 2000, 0.01).await {
        Ok(filter) => filter,
        // Server without the RedisBloom module.
        Err(_) => return,
    };

    let items: Vec<String> = (0..1000).map(|i| format!("seen-{}", i)).collect();
    filter.add_many(items.clone()).await.unwrap();

    let flags = filter.exists_many(items).await.unwrap();
    assert!(flags.into_iter().all(|present| present));

    let absent_hits = {
        let probes: Vec<String> = (0..1000).map(|i| format!("unseen-{}", i)).collect();
        filter.exists_many(probes).await.unwrap().into_iter().filter(|hit| *hit).count()
    };
    // One-sided error: a few false positives are expected, not a flood.
    assert!(absent_hits < 100, "{} false positives out of 1000", absent_hits);
}

#[tokio::test]
async fn test_timeline_trim_by_time_span() {
    let Some(client) = test_client().await else { return };
    let cache: TimelineGroupCache<String> = TimelineGroupCache::new(
        client,
        "rc_test:timeline",
        86400,
        Some(RetentionPolicy::TimeSpanDays(7)),
        true,
    );
    cache.clear_group("g1").await.unwrap();

    let now = Utc::now();
    for days_ago in [12i64, 10, 9, 8, 6, 3, 0] {
        let member = format!("day-{}", days_ago);
        cache
            .add_member("g1", &member, Some(now - Duration::days(days_ago)), false)
            .await
            .unwrap();
    }

    // Only the trailing 7-day window survives the inserts.
    let survivors: HashSet<String> = cache
        .members_by_time("g1", None, None, None, false)
        .await
        .unwrap()
        .into_iter()
        .collect();
    let expected: HashSet<String> = ["day-6", "day-3", "day-0"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(survivors, expected);

    let recent = cache
        .members_by_time("g1", Some(now - Duration::days(4)), None, None, true)
        .await
        .unwrap();
    assert_eq!(recent, vec!["day-0".to_string(), "day-3".to_string()]);

    assert!(cache.has_group("g1").await.unwrap());
    cache.clear_group("g1").await.unwrap();
    assert!(!cache.has_group("g1").await.unwrap());
}

#[tokio::test]
async fn test_timeline_trim_by_max_length() {
    let Some(client) = test_client().await else { return };
    let cache: TimelineGroupCache<u64> = TimelineGroupCache::new(
        client,
        "rc_test:capped",
        86400,
        Some(RetentionPolicy::MaxLength(3)),
        false,
    );
    cache.clear_group("g1").await.unwrap();

    let now = Utc::now();
    for i in 0u64..10 {
        cache
            .add_member("g1", &i, Some(now + Duration::seconds(i as i64)), false)
            .await
            .unwrap();
    }

    assert_eq!(cache.member_count("g1").await.unwrap(), 3);
    let newest_first = cache.members_by_rank("g1", 0, -1, true).await.unwrap();
    assert_eq!(newest_first, vec![9, 8, 7]);
}

#[tokio::test]
async fn test_fifo_group_cache_preserves_insertion_order() {
    let Some(client) = test_client().await else { return };
    let cache: FifoGroupCache<String> = FifoGroupCache::new(client, "rc_test:fifo", 3600, true);
    cache.clear_group("inbox").await.unwrap();

    for message in ["first", "second", "third"] {
        cache.add_member("inbox", &message.to_string()).await.unwrap();
    }
    assert!(cache.has_group("inbox").await.unwrap());
    assert_eq!(cache.member_count("inbox").await.unwrap(), 3);

    assert_eq!(cache.pop_member("inbox").await.unwrap(), Some("first".to_string()));
    assert_eq!(
        cache.pop_members("inbox").await.unwrap(),
        vec!["second".to_string(), "third".to_string()]
    );
    assert_eq!(cache.pop_member("inbox").await.unwrap(), None);
    assert!(!cache.has_group("inbox").await.unwrap());
}

#[tokio::test]
async fn test_dict_cache_operations() {
    let Some(client) = test_client().await else { return };
    let dict: RedisDict<Vec<i64>> = RedisDict::new(client, "rc_test:dict", 3600);
    dict.clear().await.unwrap();

    dict.set("a", &vec![1, 2, 3]).await.unwrap();
    assert_eq!(dict.get("a").await.unwrap(), Some(vec![1, 2, 3]));
    assert_eq!(dict.get("missing").await.unwrap(), None);

    // set_if_absent resolves to the stored value when the field exists.
    let resolved = dict.set_if_absent("a", &vec![9]).await.unwrap();
    assert_eq!(resolved, vec![1, 2, 3]);
    let resolved = dict.set_if_absent("b", &vec![9]).await.unwrap();
    assert_eq!(resolved, vec![9]);

    let entries = dict.get_multiple(&["a", "b", "missing"]).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(dict.len().await.unwrap(), 2);

    assert_eq!(dict.pop("a").await.unwrap(), Some(vec![1, 2, 3]));
    assert!(!dict.contains("a").await.unwrap());

    // Native-path counter field, kept disjoint from packed fields.
    assert_eq!(dict.increment("hits", 2).await.unwrap(), 2);
    assert_eq!(dict.increment("hits", 3).await.unwrap(), 5);
}

#[tokio::test]
async fn test_sorted_set_ranges() {
    let Some(client) = test_client().await else { return };
    let ranking: RedisSortedSet<String> = RedisSortedSet::new(client, "rc_test:zset", 3600);
    ranking.clear().await.unwrap();

    ranking
        .add_many(&[
            (10.0, &"bronze".to_string()),
            (20.0, &"silver".to_string()),
            (30.0, &"gold".to_string()),
        ])
        .await
        .unwrap();

    assert_eq!(
        ranking.range_by_score(Some(15.0), None, None, false).await.unwrap(),
        vec!["silver".to_string(), "gold".to_string()]
    );
    assert_eq!(
        ranking.range_by_rank(0, 0, true).await.unwrap(),
        vec!["gold".to_string()]
    );
    assert_eq!(ranking.score(&"silver".to_string()).await.unwrap(), Some(20.0));
    assert_eq!(ranking.count_by_score(None, Some(20.0)).await.unwrap(), 2);

    let bumped = ranking.increment_score(&"bronze".to_string(), 25.0).await.unwrap();
    assert_eq!(bumped, 35.0);

    assert_eq!(ranking.remove_range_by_score(None, Some(20.0)).await.unwrap(), 1);
    assert_eq!(ranking.len().await.unwrap(), 2);
}

#[tokio::test]
async fn test_connection_pool_reuses_and_resets() {
    let Some(client) = test_client().await else { return };

    {
        let mut lease = client.lease().await.unwrap();
        redis::cmd("PING").query_async::<String>(&mut *lease).await.unwrap();
    }
    client.ping().await.unwrap();

    let generation = client.pool().current_generation();
    client.reset_connections();
    assert_eq!(client.pool().current_generation(), generation + 1);
    // Post-reset leases connect fresh and still work.
    client.ping().await.unwrap();
}
