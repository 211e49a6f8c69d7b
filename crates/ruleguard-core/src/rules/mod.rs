pub mod compare;
pub mod date;
pub mod generic;
pub mod numeric;
pub mod registry;
pub mod string;

use serde_json::Value;

pub use compare::{In, IsEqual, IsSame, NotIn};
pub use date::{IsDate, IsDatetime};
pub use generic::{IsArray, IsBool, IsInt, IsJson, IsNumeric, IsString, Required};
pub use numeric::Range;
pub use registry::{predicate_names, resolve};
pub use string::{IsEmail, IsIp, IsMatch, IsSameCi, IsUrl, Length};

/// A named boolean check on a single field value.
pub trait Predicate: Send + Sync {
    /// Returns the name the rule is registered under.
    fn name(&self) -> &'static str;
    /// Checks `value`, given the raw clause argument if any.
    fn validate(&self, value: &Value, argument: Option<&str>) -> bool;
}
