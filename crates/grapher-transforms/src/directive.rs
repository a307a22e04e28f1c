//! Directive strings: `"<transformName> <param1> <param2> ..."`.
//!
//! The transform name may appear at any position; exactly one whitespace-separated token must name
//! a registered transform and every other token is a positional parameter, kept in order.

use crate::error::{TransformError, TransformResult};
use crate::registry::TransformKind;
use crate::transform::Transform;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    kind: TransformKind,
    params: Vec<String>,
}

impl Directive {
    pub fn parse(text: &str) -> TransformResult<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        let mut found: Option<(usize, TransformKind)> = None;
        let mut names = Vec::new();
        for (idx, token) in tokens.iter().enumerate() {
            if let Some(kind) = TransformKind::from_name(token) {
                names.push(kind.name());
                found.get_or_insert((idx, kind));
            }
        }

        let Some((name_idx, kind)) = found else {
            return Err(TransformError::UnknownTransform {
                directive: text.to_owned(),
            });
        };
        if names.len() > 1 {
            return Err(TransformError::AmbiguousTransform {
                directive: text.to_owned(),
                names,
            });
        }

        let params = tokens
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != name_idx)
            .map(|(_, token)| (*token).to_owned())
            .collect();

        Ok(Self { kind, params })
    }

    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn bind(&self) -> TransformResult<Transform> {
        self.kind.bind(self.params.as_slice())
    }
}
