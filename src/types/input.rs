use std::borrow::Cow;

use serde_json::Value;

/// Anything that can be read as text for the essence pipeline.
///
/// `None` from [`EssenceInput::as_text`] marks an absent input, which the
/// engine treats as the empty string.
pub trait EssenceInput {
    fn as_text(&self) -> Option<Cow<'_, str>>;
}

impl EssenceInput for str {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl EssenceInput for String {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl EssenceInput for Cow<'_, str> {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

impl<T: EssenceInput + ?Sized> EssenceInput for &T {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        (**self).as_text()
    }
}

impl<T: EssenceInput> EssenceInput for Option<T> {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|value| value.as_text())
    }
}

impl EssenceInput for () {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        None
    }
}

/// `Null` is absent; strings are taken verbatim; floating-point numbers are
/// written as JavaScript would; everything else is read as its JSON text.
impl EssenceInput for Value {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) if n.is_f64() => n.as_f64().map(|f| Cow::Owned(f.to_js_text())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

macro_rules! display_input {
    ($($t:ty),* $(,)?) => {
        $(
            impl EssenceInput for $t {
                fn as_text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

display_input!(char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Number-to-text the way JavaScript's `String(number)` spells it: shortest
/// round-trip digits, `Infinity`/`NaN`, no negative zero, and exponent
/// notation outside `[1e-6, 1e21)`.
trait JsText {
    fn to_js_text(self) -> String;
}

macro_rules! float_input {
    ($($t:ty),*) => {
        $(
            impl JsText for $t {
                fn to_js_text(self) -> String {
                    if self.is_nan() {
                        return "NaN".to_string();
                    }
                    if self.is_infinite() {
                        return if self > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
                    }
                    if self == 0.0 {
                        return "0".to_string();
                    }
                    let magnitude = self.abs();
                    if magnitude >= 1e21 || magnitude < 1e-6 {
                        let text = format!("{:e}", self);
                        return match text.split_once('e') {
                            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                                format!("{mantissa}e+{exponent}")
                            }
                            _ => text,
                        };
                    }
                    self.to_string()
                }
            }

            impl EssenceInput for $t {
                fn as_text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_js_text()))
                }
            }
        )*
    };
}

float_input!(f32, f64);
