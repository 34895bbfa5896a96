//! Runs against a live server: `REDIS_HOST=localhost cargo test -- --ignored`.

use std::env;

use redis::Commands;
use redis_kv::{
    KvFacade, KvsEngine, KvsError, RedisKvsEngine, StoreConfig, Value, DEFAULT_PORT,
};
use uuid::Uuid;

fn config() -> StoreConfig {
    let host = env::var("REDIS_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("REDIS_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    StoreConfig::new(host).with_port(port)
}

fn live() -> KvFacade<RedisKvsEngine> {
    KvFacade::connect(&config()).expect("bad store config")
}

/// Direct connection for writing what the facade can't.
fn raw() -> redis::Connection {
    redis::Client::open(config().url())
        .and_then(|client| client.get_connection())
        .expect("could not reach redis")
}

fn unique(name: &str) -> String {
    format!("redis-kv-test:{}:{}", name, Uuid::new_v4())
}

#[test]
#[ignore]
fn put_get_roundtrip() {
    let mut kv = live();
    let key = unique("greeting");
    kv.put(&key, "hello").unwrap();
    kv.put(&key, "hello again").unwrap();
    assert_eq!(
        kv.get(Some(&key)).unwrap().value,
        Value::Found("hello again".to_string())
    );

    let mut engine = kv.into_inner();
    engine.remove(key.clone()).unwrap();
    assert_eq!(engine.get(key).unwrap(), None);
}

#[test]
#[ignore]
fn absent_key_is_not_found() {
    let mut kv = live();
    assert_eq!(
        kv.get(Some(&unique("absent"))).unwrap().value,
        Value::NotFound
    );
}

#[test]
#[ignore]
fn health_check_passes() {
    assert!(live().health_check());
}

#[test]
#[ignore]
fn non_utf8_value_is_decode_error() {
    let key = unique("binary");
    let mut con = raw();
    redis::Cmd::set(&key, &[0xffu8, 0xfe][..])
        .query::<()>(&mut con)
        .unwrap();

    let result = live().get(Some(&key));
    con.del::<_, ()>(&key).unwrap();
    assert!(
        matches!(&result, Err(KvsError::Decode { key: k, .. }) if *k == key),
        "unexpected result: {:?}",
        result
    );
}

#[test]
#[ignore]
fn wrong_type_reply_is_rejected() {
    let key = unique("list");
    let mut con = raw();
    con.lpush::<_, _, ()>(&key, "item").unwrap();

    let result = live().get(Some(&key));
    con.del::<_, ()>(&key).unwrap();
    assert!(
        matches!(&result, Err(KvsError::Rejected { .. })),
        "unexpected result: {:?}",
        result
    );
}
