mod plural_form;
mod value;

pub use plural_form::{PluralForm, UnknownPluralForm};
pub use value::{FmtParams, Value};
