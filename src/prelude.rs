pub use std::{
    collections::{BTreeMap, HashMap},
    env, fs,
    io::Write,
    path::PathBuf,
    sync::{Arc, RwLock},
};

pub use tokio::time::{Duration, Interval, interval};

pub use anyhow::anyhow;
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use futures::future::join_all;
pub use getset::{Getters, Setters};
pub use log::{error, info, warn};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
pub use serde_json::Value;
