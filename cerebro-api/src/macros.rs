/// Chained setters for outgoing payloads.
///
/// `text` fields take anything string-like and store it trimmed;
/// `maybe` fields fill an `Option`.
macro_rules! payload_fields {
    ($($kind:ident $field:ident : $ty:ty),* $(,)?) => {
        $( payload_fields!(@field $kind $field : $ty); )*
    };

    (@field text $field:ident : $ty:ty) => {
        pub fn $field(mut self, value: impl AsRef<str>) -> Self {
            self.$field = <$ty>::from(value.as_ref().trim());
            self
        }
    };

    (@field maybe $field:ident : $ty:ty) => {
        pub fn $field(mut self, value: impl Into<$ty>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
}

pub(crate) use payload_fields;
