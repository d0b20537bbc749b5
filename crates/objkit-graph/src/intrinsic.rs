//! Intrinsic (non-plain) leaf types.
//!
//! Intrinsics carry opaque internal state a shallow property copy would not
//! reproduce, so the differ treats them as atomic leaves and the cloner
//! shares them by reference. The set of kinds is closed.

use std::cell::RefCell;
use std::fmt;

use regex::Regex;

use crate::value::Value;

/// An opaque leaf value.
///
/// Collection kinds (`Map`, `Set`) hold `Value` children, but they are
/// still *leaves* to the structural algorithms: diff never recurses into
/// them and clone never copies them.
pub enum Intrinsic {
    /// A calendar instant, milliseconds since the Unix epoch.
    Date { epoch_ms: i64 },
    /// A compiled regular expression.
    Regex(Regex),
    /// A raw binary buffer.
    Buffer(RefCell<Vec<u8>>),
    /// A fixed-width typed view over binary data.
    View {
        elem: ElemKind,
        data: RefCell<Vec<u8>>,
    },
    /// An untyped mutable window over binary data.
    DataView(RefCell<Vec<u8>>),
    /// An immutable binary payload with a media type.
    Blob { mime: String, data: Vec<u8> },
    /// A named binary payload.
    File {
        name: String,
        mime: String,
        data: Vec<u8>,
    },
    /// Raw pixel data.
    ImageData {
        width: u32,
        height: u32,
        data: Vec<u8>,
    },
    /// An opaque cryptographic key handle. Only metadata is observable.
    CryptoKey {
        algorithm: String,
        extractable: bool,
        usages: Vec<String>,
    },
    /// A keyed collection. Keys are arbitrary values compared strictly.
    Map(RefCell<Vec<(Value, Value)>>),
    /// An ordered collection of distinct values.
    Set(RefCell<Vec<Value>>),
}

/// Element type of a typed [`Intrinsic::View`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElemKind {
    I8,
    U8,
    U8Clamped,
    I16,
    U16,
    I32,
    U32,
    F32,
    F64,
}

/// The type tag of an intrinsic: the discriminator the differ compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Date,
    Regex,
    Buffer,
    View(ElemKind),
    DataView,
    Blob,
    File,
    ImageData,
    CryptoKey,
    Map,
    Set,
}

impl Intrinsic {
    pub fn kind(&self) -> IntrinsicKind {
        match self {
            Intrinsic::Date { .. } => IntrinsicKind::Date,
            Intrinsic::Regex(_) => IntrinsicKind::Regex,
            Intrinsic::Buffer(_) => IntrinsicKind::Buffer,
            Intrinsic::View { elem, .. } => IntrinsicKind::View(*elem),
            Intrinsic::DataView(_) => IntrinsicKind::DataView,
            Intrinsic::Blob { .. } => IntrinsicKind::Blob,
            Intrinsic::File { .. } => IntrinsicKind::File,
            Intrinsic::ImageData { .. } => IntrinsicKind::ImageData,
            Intrinsic::CryptoKey { .. } => IntrinsicKind::CryptoKey,
            Intrinsic::Map(_) => IntrinsicKind::Map,
            Intrinsic::Set(_) => IntrinsicKind::Set,
        }
    }

    /// Entries of a `Map` intrinsic, `None` for other kinds.
    pub fn map_entries(&self) -> Option<Vec<(Value, Value)>> {
        match self {
            Intrinsic::Map(entries) => Some(entries.borrow().clone()),
            _ => None,
        }
    }

    /// Members of a `Set` intrinsic, `None` for other kinds.
    pub fn set_members(&self) -> Option<Vec<Value>> {
        match self {
            Intrinsic::Set(members) => Some(members.borrow().clone()),
            _ => None,
        }
    }
}

impl fmt::Debug for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intrinsic::Date { epoch_ms } => write!(f, "Date({epoch_ms})"),
            Intrinsic::Regex(re) => write!(f, "Regex({:?})", re.as_str()),
            Intrinsic::Buffer(data) => write!(f, "Buffer({} bytes)", data.borrow().len()),
            Intrinsic::View { elem, data } => {
                write!(f, "View({:?}, {} bytes)", elem, data.borrow().len())
            }
            Intrinsic::DataView(data) => write!(f, "DataView({} bytes)", data.borrow().len()),
            Intrinsic::Blob { mime, data } => write!(f, "Blob({mime}, {} bytes)", data.len()),
            Intrinsic::File { name, mime, data } => {
                write!(f, "File({name}, {mime}, {} bytes)", data.len())
            }
            Intrinsic::ImageData { width, height, .. } => {
                write!(f, "ImageData({width}x{height})")
            }
            Intrinsic::CryptoKey { algorithm, .. } => write!(f, "CryptoKey({algorithm})"),
            Intrinsic::Map(entries) => write!(f, "Map({} entries)", entries.borrow().len()),
            Intrinsic::Set(members) => write!(f, "Set({} members)", members.borrow().len()),
        }
    }
}

// Convenience constructors on `Value`, the form call sites actually want.
impl Value {
    pub fn date(epoch_ms: i64) -> Value {
        Value::Intrinsic(std::rc::Rc::new(Intrinsic::Date { epoch_ms }))
    }

    pub fn regex(pattern: &str) -> Result<Value, regex::Error> {
        Ok(Value::Intrinsic(std::rc::Rc::new(Intrinsic::Regex(
            Regex::new(pattern)?,
        ))))
    }

    pub fn buffer(data: Vec<u8>) -> Value {
        Value::Intrinsic(std::rc::Rc::new(Intrinsic::Buffer(RefCell::new(data))))
    }

    pub fn view(elem: ElemKind, data: Vec<u8>) -> Value {
        Value::Intrinsic(std::rc::Rc::new(Intrinsic::View {
            elem,
            data: RefCell::new(data),
        }))
    }

    pub fn map_of(entries: impl IntoIterator<Item = (Value, Value)>) -> Value {
        Value::Intrinsic(std::rc::Rc::new(Intrinsic::Map(RefCell::new(
            entries.into_iter().collect(),
        ))))
    }

    pub fn set_of(members: impl IntoIterator<Item = Value>) -> Value {
        Value::Intrinsic(std::rc::Rc::new(Intrinsic::Set(RefCell::new(
            members.into_iter().collect(),
        ))))
    }
}
