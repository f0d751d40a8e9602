#[cfg(test)]
mod containers_tests {
    use crate::client::structs::redis_client::RedisClient;
    use crate::config::structs::redis_client_config::RedisClientConfig;

    fn client() -> RedisClient {
        RedisClient::new(RedisClientConfig::default()).unwrap()
    }

    mod retention_policy_tests {
        use crate::containers::enums::retention_policy::RetentionPolicy;

        #[test]
        fn test_retention_policy_equality() {
            assert_eq!(RetentionPolicy::TimeSpanDays(7), RetentionPolicy::TimeSpanDays(7));
            assert_ne!(RetentionPolicy::TimeSpanDays(7), RetentionPolicy::MaxLength(7));
        }

        #[test]
        fn test_retention_policy_serialization() {
            let serialized = serde_json::to_string(&RetentionPolicy::MaxLength(100)).unwrap();
            let parsed: RetentionPolicy = serde_json::from_str(&serialized).unwrap();
            assert_eq!(parsed, RetentionPolicy::MaxLength(100));
        }
    }

    mod timeline_tests {
        use chrono::{TimeZone, Utc};
        use super::client;
        use crate::containers::impls::timeline_group_cache::{epoch_seconds, score_to_time};
        use crate::containers::structs::timeline_group_cache::TimelineGroupCache;

        #[test]
        fn test_group_and_registry_keys() {
            let cache: TimelineGroupCache<String> =
                TimelineGroupCache::new(client(), "chat:last_read", 86400, None, true);
            assert_eq!(cache.group_key("room-7"), "chat:last_read:room-7");
            assert_eq!(cache.registry_key(), "chat:last_read:_GROUP_SET");
        }

        #[test]
        fn test_epoch_seconds_roundtrip() {
            let at = Utc.with_ymd_and_hms(2026, 8, 4, 12, 30, 45).unwrap();
            let score = epoch_seconds(Some(at));
            assert_eq!(score, at.timestamp() as f64);
            assert_eq!(score_to_time(score), Some(at));
        }

        #[test]
        fn test_epoch_seconds_keeps_subsecond_precision() {
            let at = Utc.timestamp_millis_opt(1_760_000_000_250).unwrap();
            let score = epoch_seconds(Some(at));
            assert_eq!(score, 1_760_000_000.25);
        }

        #[test]
        fn test_epoch_seconds_defaults_to_now() {
            let before = epoch_seconds(None);
            let after = epoch_seconds(None);
            assert!(before > 1_600_000_000.0);
            assert!(after >= before);
        }
    }

    mod fifo_tests {
        use super::client;
        use crate::containers::structs::fifo_group_cache::FifoGroupCache;

        #[test]
        fn test_group_and_registry_keys() {
            let cache: FifoGroupCache<String> = FifoGroupCache::new(client(), "push:queue", 3600, true);
            assert_eq!(cache.group_key("user-9"), "push:queue:user-9");
            assert_eq!(cache.registry_key(), "push:queue_general_list_group_set");
        }
    }

    mod daily_counter_tests {
        use chrono::NaiveDate;
        use super::client;
        use crate::containers::structs::daily_counter::DailyCounter;

        #[test]
        fn test_counter_key_embeds_pinned_date() {
            let date = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
            let counter = DailyCounter::with_options(client(), "signups", 86400, Some(date));
            assert_eq!(counter.counter_key(), "redis_daily_counter_key_signups_2026-08-04");
        }

        #[test]
        fn test_counter_key_rotates_with_today() {
            let counter = DailyCounter::new(client(), "signups");
            let today = chrono::Local::now().date_naive();
            assert_eq!(
                counter.counter_key(),
                format!("redis_daily_counter_key_signups_{}", today)
            );
        }
    }

    mod container_key_tests {
        use super::client;
        use crate::containers::structs::redis_dict::RedisDict;
        use crate::containers::structs::redis_sorted_set::RedisSortedSet;

        #[test]
        fn test_cache_key_passthrough() {
            let dict: RedisDict<u64> = RedisDict::new(client(), "profiles", 3600);
            assert_eq!(dict.cache_key(), "profiles");
            let ranking: RedisSortedSet<String> = RedisSortedSet::new(client(), "ranking:weekly", 3600);
            assert_eq!(ranking.cache_key(), "ranking:weekly");
        }
    }
}
