// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

pub trait IdentifierMarkerName {
    const NAME: &'static str;
}

/// A value tagged with the kind of entity it identifies.
///
/// Vessel ids and berth ids have different markers, so one can never be
/// passed where the other is expected.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier<I, U>(I, core::marker::PhantomData<U>);

impl<I, U> Identifier<I, U> {
    #[inline]
    pub fn new(id: I) -> Self {
        Self(id, core::marker::PhantomData)
    }

    #[inline]
    pub fn value(&self) -> &I {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<U> Identifier<String, U> {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<U> From<&str> for Identifier<String, U> {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s.to_owned())
    }
}

impl<U> From<String> for Identifier<String, U> {
    #[inline]
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl<I, U> std::fmt::Display for Identifier<I, U>
where
    I: std::fmt::Display,
    U: IdentifierMarkerName,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", U::NAME, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    struct Tag;

    impl IdentifierMarkerName for Tag {
        const NAME: &'static str = "TagId";
    }

    #[test]
    fn test_display_includes_marker_name() {
        let id: Identifier<u32, Tag> = Identifier::new(4);
        assert_eq!(id.to_string(), "TagId(4)");
    }

    #[test]
    fn test_string_ids_compare_by_value() {
        let a: Identifier<String, Tag> = "V1".into();
        let b: Identifier<String, Tag> = Identifier::new("V1".to_string());
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "V1");
        assert!(Identifier::<String, Tag>::from("V1") < Identifier::from("V2"));
    }
}
