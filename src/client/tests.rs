#[cfg(test)]
mod client_tests {
    mod key_guard_tests {
        use crate::client::errors::CacheError;
        use crate::client::structs::redis_client::RedisClient;
        use crate::client::impls::redis_client::MAX_KEY_BYTES;

        #[test]
        fn test_key_at_bound_accepted() {
            let key = "k".repeat(MAX_KEY_BYTES);
            assert!(RedisClient::check_key(&key).is_ok());
        }

        #[test]
        fn test_key_over_bound_rejected() {
            let key = "k".repeat(MAX_KEY_BYTES + 1);
            match RedisClient::check_key(&key) {
                Err(CacheError::KeyTooLong { length, .. }) => assert_eq!(length, MAX_KEY_BYTES + 1),
                other => panic!("expected KeyTooLong, got {:?}", other),
            }
        }

        #[test]
        fn test_bound_counts_bytes_not_chars() {
            // 64 three-byte characters: 64 chars, 192 bytes.
            let key = "\u{4e2d}".repeat(64);
            assert!(RedisClient::check_key(&key).is_err());
        }
    }

    mod score_arg_tests {
        use crate::client::impls::redis_client::score_arg;

        #[test]
        fn test_open_ends() {
            assert_eq!(score_arg(None, "-inf"), "-inf");
            assert_eq!(score_arg(None, "+inf"), "+inf");
        }

        #[test]
        fn test_infinities_normalized() {
            assert_eq!(score_arg(Some(f64::INFINITY), "-inf"), "+inf");
            assert_eq!(score_arg(Some(f64::NEG_INFINITY), "+inf"), "-inf");
        }

        #[test]
        fn test_finite_scores() {
            assert_eq!(score_arg(Some(0.0), "-inf"), "0");
            assert_eq!(score_arg(Some(1.5), "-inf"), "1.5");
            assert_eq!(score_arg(Some(-3.25), "+inf"), "-3.25");
        }
    }

    mod value_codec_tests {
        use std::collections::BTreeMap;
        use serde::{Deserialize, Serialize};
        use crate::client::traits::value_codec::{Json, MsgPack, ValueCodec};

        #[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
        struct Activity {
            id: u64,
            title: String,
            tags: Vec<String>,
            extra: BTreeMap<String, i64>,
        }

        fn sample() -> Activity {
            let mut extra = BTreeMap::new();
            extra.insert("views".to_string(), 120);
            extra.insert("likes".to_string(), -3);
            Activity {
                id: 42,
                title: "night market".to_string(),
                tags: vec!["food".to_string(), "walk".to_string()],
                extra,
            }
        }

        #[test]
        fn test_msgpack_roundtrip_nested() {
            let value = sample();
            let encoded = MsgPack::encode(&value).unwrap();
            let decoded: Activity = MsgPack::decode(&encoded).unwrap();
            assert_eq!(decoded, value);
        }

        #[test]
        fn test_json_roundtrip_nested() {
            let value = sample();
            let encoded = Json::encode(&value).unwrap();
            let decoded: Activity = Json::decode(&encoded).unwrap();
            assert_eq!(decoded, value);
        }

        #[test]
        fn test_msgpack_primitives() {
            let encoded = MsgPack::encode(&7i64).unwrap();
            let decoded: i64 = MsgPack::decode(&encoded).unwrap();
            assert_eq!(decoded, 7);

            let encoded = MsgPack::encode("member-a").unwrap();
            let decoded: String = MsgPack::decode(&encoded).unwrap();
            assert_eq!(decoded, "member-a");
        }

        #[test]
        fn test_decode_garbage_is_serialization_error() {
            let result: Result<Activity, _> = MsgPack::decode(&[0xc1, 0xff, 0x00]);
            assert!(result.is_err());
            let result: Result<Activity, _> = Json::decode(b"{not json");
            assert!(result.is_err());
        }

        proptest::proptest! {
            #[test]
            fn test_msgpack_roundtrip_strings(value in ".*") {
                let encoded = MsgPack::encode(&value).unwrap();
                let decoded: String = MsgPack::decode(&encoded).unwrap();
                proptest::prop_assert_eq!(decoded, value);
            }

            #[test]
            fn test_msgpack_roundtrip_int_lists(values in proptest::collection::vec(proptest::num::i64::ANY, 0..32)) {
                let encoded = MsgPack::encode(&values).unwrap();
                let decoded: Vec<i64> = MsgPack::decode(&encoded).unwrap();
                proptest::prop_assert_eq!(decoded, values);
            }
        }
    }

    mod pool_tests {
        use crate::client::structs::connection_pool::ConnectionPool;
        use crate::config::structs::redis_client_config::RedisClientConfig;

        #[test]
        fn test_pool_construction_is_lazy() {
            // No server listening here; building the pool must still succeed
            // since connections are only opened on lease.
            let config = RedisClientConfig {
                host: String::from("127.0.0.1"),
                port: 1,
                ..RedisClientConfig::default()
            };
            let pool = ConnectionPool::new(config).unwrap();
            assert_eq!(pool.current_generation(), 0);
        }

        #[test]
        fn test_reset_bumps_generation() {
            let pool = ConnectionPool::new(RedisClientConfig::default()).unwrap();
            assert_eq!(pool.current_generation(), 0);
            pool.reset();
            pool.reset();
            assert_eq!(pool.current_generation(), 2);
        }

        #[tokio::test]
        async fn test_closed_pool_refuses_leases() {
            let pool = std::sync::Arc::new(ConnectionPool::new(RedisClientConfig::default()).unwrap());
            pool.close();
            // Fails at the slot gate, before any connect attempt.
            assert!(pool.acquire().await.is_err());
        }
    }
}
