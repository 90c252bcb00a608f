use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Everything `encodeURIComponent` escapes.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Null,
}

impl QueryValue {
    /// Falsy values are left out of the query string entirely.
    pub fn is_truthy(&self) -> bool {
        match self {
            QueryValue::Str(s) => !s.is_empty(),
            QueryValue::Int(i) => *i != 0,
            QueryValue::Bool(b) => *b,
            QueryValue::Null => false,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(i) => write!(f, "{}", i),
            QueryValue::Bool(b) => write!(f, "{}", b),
            QueryValue::Null => Ok(()),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for QueryValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u8> for QueryValue {
    fn from(i: u8) -> Self {
        Self::Int(i.into())
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Types that can be sent as a query string.
pub trait ToQuery {
    /// Parameter pairs in the order they should appear in the query.
    fn query_pairs(&self) -> Vec<(&'static str, QueryValue)>;

    fn to_query(&self) -> String {
        encode_query(self.query_pairs())
    }
}

/// Joins the truthy `key=value` pairs with `&`, percent-encoding both sides.
pub fn encode_query<'a, I, V>(params: I) -> String
where
    I: IntoIterator<Item = (&'a str, V)>,
    V: Into<QueryValue>,
{
    params
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value.into();

            value.is_truthy().then(|| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, COMPONENT),
                    utf8_percent_encode(&value.to_string(), COMPONENT)
                )
            })
        })
        .collect::<Vec<String>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::{encode_query, QueryValue};
    use percent_encoding::percent_decode_str;
    use pretty_assertions::assert_eq;

    #[test]
    fn skips_falsy_values() {
        let query = encode_query([
            ("amount", QueryValue::from(5u8)),
            ("category", QueryValue::Int(0)),
            ("difficulty", "easy".into()),
        ]);

        assert_eq!(query, "amount=5&difficulty=easy");
    }

    #[test]
    fn empty_mapping() {
        assert_eq!(encode_query(Vec::<(&str, QueryValue)>::new()), "");
        assert_eq!(
            encode_query([
                ("a", QueryValue::Null),
                ("b", "".into()),
                ("c", false.into()),
                ("d", QueryValue::Int(0)),
            ]),
            ""
        );
    }

    #[test]
    fn keeps_key_order() {
        let query = encode_query([("z", "1"), ("a", "2"), ("m", "3")]);

        assert_eq!(query, "z=1&a=2&m=3");
    }

    #[test]
    fn stringifies_scalars() {
        let query = encode_query([
            ("flag", QueryValue::from(true)),
            ("negative", QueryValue::Int(-3)),
            ("token", Some("abc").into()),
        ]);

        assert_eq!(query, "flag=true&negative=-3&token=abc");
    }

    #[test]
    fn percent_encodes_like_uri_components() {
        let query = encode_query([("a key", "Don't & π = 3.14 (roughly)!")]);

        assert_eq!(query, "a%20key=Don't%20%26%20%CF%80%20%3D%203.14%20(roughly)!");
    }

    #[test]
    fn decoding_pairs_recovers_inputs() {
        let inputs = [
            ("token", "a/b+c=d"),
            ("q", "What's 1 + 1?"),
            ("名前", "値"),
        ];

        let query = encode_query(inputs);

        let decoded = query
            .split('&')
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap();
                (
                    percent_decode_str(key).decode_utf8().unwrap().into_owned(),
                    percent_decode_str(value).decode_utf8().unwrap().into_owned(),
                )
            })
            .collect::<Vec<_>>();

        let expected = inputs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>();

        assert_eq!(decoded, expected);
    }
}
