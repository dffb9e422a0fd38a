//! Shared records and sinks for unit tests.

use crate::obs::{EncodeEvent, EncodeSink, SkipReason};
use rowmut_derive::{Columns, Qualified};
use std::{collections::HashMap, sync::Mutex};

///
/// Everything
///
/// One field per supported kind plus the tag forms: an omitted zero, an
/// ignored field and an untagged field.
///

#[derive(Clone, Columns, Debug)]
pub(crate) struct Everything {
    #[column("tbytes")]
    pub(crate) t_bytes: Vec<u8>,
    #[column("tstr")]
    pub(crate) t_string: String,
    #[column("tint")]
    pub(crate) t_int: isize,
    #[column("tuint")]
    pub(crate) t_uint: usize,
    #[column("tbool")]
    pub(crate) t_bool: bool,
    #[column("tomitstr, omitempty")]
    pub(crate) t_omit_str: String,
    #[column("tomitint, omitempty")]
    pub(crate) t_omit_int: isize,
    #[column("-")]
    pub(crate) t_ignore: i64,
    #[column("tint8")]
    pub(crate) t_int8: i8,
    #[column("tint16")]
    pub(crate) t_int16: i16,
    #[column("tint32")]
    pub(crate) t_int32: i32,
    #[column("tint64")]
    pub(crate) t_int64: i64,
    #[column("tfloat32")]
    pub(crate) t_float32: f32,
    #[column("tfloat64")]
    pub(crate) t_float64: f64,
    pub(crate) t_non_tag: String,
}

impl Everything {
    pub(crate) fn sample() -> Self {
        Self {
            t_bytes: b"bytebyte".to_vec(),
            t_string: "test1".to_string(),
            t_int: 100,
            t_uint: 200,
            t_bool: true,
            t_omit_str: "test2".to_string(),
            t_omit_int: 0,
            t_ignore: 1000,
            t_int8: 8,
            t_int16: 16,
            t_int32: 32,
            t_int64: 64,
            t_float32: 3.2,
            t_float64: 6.4,
            t_non_tag: "test3".to_string(),
        }
    }
}

///
/// WithMap
///

#[derive(Columns)]
pub(crate) struct WithMap {
    #[column("ok")]
    pub(crate) ok: String,
    #[column("wrong")]
    pub(crate) wrong: HashMap<String, i64>,
}

///
/// NoFields
///

#[derive(Columns)]
pub(crate) struct NoFields {}

///
/// DuplicateColumns
///

#[derive(Columns)]
pub(crate) struct DuplicateColumns {
    #[column("a")]
    pub(crate) first: u8,
    #[column("b")]
    pub(crate) middle: u8,
    #[column("a")]
    pub(crate) last: u8,
}

///
/// Cq
///

#[derive(Clone, Debug, Qualified)]
#[allow(dead_code)]
pub(crate) struct Cq {
    pub(crate) id: String,
    #[column("qualifier")]
    pub(crate) qualifier: String,
}

impl Cq {
    pub(crate) fn new(id: &str, qualifier: &str) -> Self {
        Self {
            id: id.to_string(),
            qualifier: qualifier.to_string(),
        }
    }
}

///
/// RecordingSink
///

#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    events: Mutex<Vec<String>>,
    skips: Mutex<Vec<(String, SkipReason)>>,
}

impl RecordingSink {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn skips(&self) -> Vec<(String, SkipReason)> {
        self.skips.lock().unwrap().clone()
    }
}

impl EncodeSink for RecordingSink {
    fn record(&self, event: EncodeEvent<'_>) {
        let label = match event {
            EncodeEvent::Start { .. } => "start".to_string(),
            EncodeEvent::Skipped {
                qualifier, reason, ..
            } => {
                self.skips
                    .lock()
                    .unwrap()
                    .push((qualifier.to_string(), reason));
                "skipped".to_string()
            }
            EncodeEvent::Finish { mutations, .. } => format!("finish:{mutations}"),
            EncodeEvent::Failed { class, .. } => format!("failed:{class}"),
        };

        self.events.lock().unwrap().push(label);
    }
}
