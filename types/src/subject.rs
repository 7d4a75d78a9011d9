//! How checked values appear in failure messages, and their type identity.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Static type of a checked value.
///
/// Equality and hashing use the [`TypeId`] only; the name is for messages.
#[derive(Debug, Clone, Copy)]
pub struct TypeIdentity {
    id: TypeId,
    name: &'static str,
}

impl TypeIdentity {
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    #[must_use]
    pub fn id(self) -> TypeId {
        self.id
    }

    #[must_use]
    pub fn full_name(self) -> &'static str {
        self.name
    }

    /// Type name without module paths: `Option<i32>` rather than `core::option::Option<i32>`.
    #[must_use]
    pub fn short_name(self) -> String {
        shorten_type_name(self.name)
    }

    #[must_use]
    pub fn is<U: ?Sized + 'static>(self) -> bool {
        self.id == TypeId::of::<U>()
    }
}

impl PartialEq for TypeIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}

/// Strip module paths from every path segment of a type name.
#[must_use]
pub fn shorten_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut path = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            path.push(ch);
        } else {
            push_last_segment(&mut out, &path);
            path.clear();
            out.push(ch);
        }
    }
    push_last_segment(&mut out, &path);
    out
}

fn push_last_segment(out: &mut String, path: &str) {
    out.push_str(path.rsplit("::").next().unwrap_or(path));
}

/// A value that can be named and shown inside a failure message.
///
/// `label` is the noun after "The checked": `boolean`, `char`, `string`,
/// `value`, ... `render` is what appears between the brackets of a value
/// block.
pub trait Subject {
    fn label() -> &'static str;

    fn render(&self) -> String;

    /// Identity of the wrapped type when `Self` is a nullable wrapper.
    ///
    /// Type-membership checks compare against this inner type so that an
    /// empty `Option<i32>` still counts as an instance of `i32`.
    fn nullable_inner() -> Option<TypeIdentity> {
        None
    }
}

impl Subject for bool {
    fn label() -> &'static str {
        "boolean"
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Subject for char {
    fn label() -> &'static str {
        "char"
    }

    fn render(&self) -> String {
        format!("{self:?}")
    }
}

impl Subject for str {
    fn label() -> &'static str {
        "string"
    }

    fn render(&self) -> String {
        format!("{self:?}")
    }
}

impl Subject for String {
    fn label() -> &'static str {
        "string"
    }

    fn render(&self) -> String {
        format!("{self:?}")
    }
}

macro_rules! numeric_subject {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Subject for $ty {
                fn label() -> &'static str {
                    "value"
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

numeric_subject!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl<T: Subject + ?Sized> Subject for &T {
    fn label() -> &'static str {
        T::label()
    }

    fn render(&self) -> String {
        (**self).render()
    }

    fn nullable_inner() -> Option<TypeIdentity> {
        T::nullable_inner()
    }
}

impl<T: Subject + 'static> Subject for Option<T> {
    fn label() -> &'static str {
        "nullable value"
    }

    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => "null".to_string(),
        }
    }

    fn nullable_inner() -> Option<TypeIdentity> {
        Some(TypeIdentity::of::<T>())
    }
}

impl<T: Subject> Subject for [T] {
    fn label() -> &'static str {
        "enumerable"
    }

    fn render(&self) -> String {
        let items: Vec<String> = self.iter().map(Subject::render).collect();
        format!("{{{}}}", items.join(", "))
    }
}

impl<T: Subject> Subject for Vec<T> {
    fn label() -> &'static str {
        "enumerable"
    }

    fn render(&self) -> String {
        self.as_slice().render()
    }
}

/// Implement [`Subject`] for user types through their `Debug` output.
///
/// ```
/// #[derive(Debug, Clone)]
/// struct Person {
///     name: String,
/// }
///
/// fluent_types::debug_subject!(Person);
/// ```
///
/// A custom label can be given with `debug_subject!(Person => "person")`.
#[macro_export]
macro_rules! debug_subject {
    ($ty:ty => $label:literal) => {
        impl $crate::Subject for $ty {
            fn label() -> &'static str {
                $label
            }

            fn render(&self) -> ::std::string::String {
                ::std::format!("{self:?}")
            }
        }
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            $crate::debug_subject!($ty => "value");
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::{Subject, TypeIdentity, shorten_type_name};

    #[derive(Debug)]
    struct Ticket {
        id: u32,
    }

    crate::debug_subject!(Ticket => "ticket");

    #[test]
    fn booleans_and_chars_render_like_literals() {
        assert_eq!(true.render(), "true");
        assert_eq!('.'.render(), "'.'");
        assert_eq!(<char as Subject>::label(), "char");
    }

    #[test]
    fn strings_render_quoted() {
        assert_eq!("Thomas".render(), "\"Thomas\"");
        assert_eq!(String::from("a\tb").render(), "\"a\\tb\"");
        assert_eq!(<&str as Subject>::label(), "string");
    }

    #[test]
    fn options_render_null_and_expose_inner_type() {
        assert_eq!(None::<i32>.render(), "null");
        assert_eq!(Some(3).render(), "3");
        assert_eq!(
            <Option<i32> as Subject>::nullable_inner(),
            Some(TypeIdentity::of::<i32>())
        );
        assert_eq!(<i32 as Subject>::nullable_inner(), None);
    }

    #[test]
    fn sequences_render_in_braces() {
        assert_eq!(vec![1, 2, 3].render(), "{1, 2, 3}");
        assert_eq!(Vec::<u8>::new().render(), "{}");
    }

    #[test]
    fn debug_subject_uses_debug_output() {
        let ticket = Ticket { id: 7 };
        assert_eq!(ticket.id, 7);
        assert_eq!(ticket.render(), "Ticket { id: 7 }");
        assert_eq!(<Ticket as Subject>::label(), "ticket");
    }

    #[test]
    fn shortens_nested_paths() {
        assert_eq!(shorten_type_name("core::option::Option<i32>"), "Option<i32>");
        assert_eq!(
            shorten_type_name("alloc::vec::Vec<(u8, alloc::string::String)>"),
            "Vec<(u8, String)>"
        );
        assert_eq!(shorten_type_name("&str"), "&str");
    }

    #[test]
    fn identity_compares_by_type_id() {
        assert_eq!(TypeIdentity::of::<u8>(), TypeIdentity::of::<u8>());
        assert_ne!(TypeIdentity::of::<u8>(), TypeIdentity::of::<i8>());
        assert!(TypeIdentity::of::<String>().is::<String>());
        assert_eq!(TypeIdentity::of::<Option<u8>>().to_string(), "Option<u8>");
    }
}
