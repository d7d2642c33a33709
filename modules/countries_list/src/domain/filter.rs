use pagination::SelectFilter;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, Select};
use thiserror::Error;

use crate::infra::storage::country;

/// Errors raised while parsing filter query parameters.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Unknown ordering field: '{field}' (expected id, name or iso)")]
    UnknownOrderingField { field: String },

    #[error("Invalid id in id_in: '{value}'")]
    InvalidId { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    Name,
    Iso,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    pub field: OrderField,
    pub descending: bool,
}

/// Typed country filter: predicate fields plus an ordering rule.
#[derive(Debug, Clone)]
pub struct CountriesFilter {
    /// Keep only these ids.
    pub id_in: Option<Vec<i32>>,
    /// Case-insensitive substring match on the name.
    pub name_ilike: Option<String>,
    /// Exact ISO code match.
    pub iso: Option<String>,
    /// Ordering rules, applied in sequence.
    pub ordering: Vec<Ordering>,
}

impl Default for CountriesFilter {
    fn default() -> Self {
        Self {
            id_in: None,
            name_ilike: None,
            iso: None,
            ordering: vec![Ordering {
                field: OrderField::Name,
                descending: false,
            }],
        }
    }
}

impl CountriesFilter {
    /// Build a filter from raw query-parameter strings.
    ///
    /// `id_in` is a comma-separated id list; `ordering` is a comma-separated
    /// field list where a leading `-` selects descending order. Unknown
    /// ordering fields are rejected, mirroring the closed field set.
    pub fn from_query(
        id_in: Option<&str>,
        name_ilike: Option<String>,
        iso: Option<String>,
        ordering: Option<&str>,
    ) -> Result<Self, FilterError> {
        let id_in = id_in
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| {
                        s.parse::<i32>().map_err(|_| FilterError::InvalidId {
                            value: s.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let ordering = match ordering {
            None => Self::default().ordering,
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(parse_ordering)
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Self {
            id_in,
            name_ilike,
            iso,
            ordering,
        })
    }
}

fn parse_ordering(raw: &str) -> Result<Ordering, FilterError> {
    let (descending, name) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    let field = match name {
        "id" => OrderField::Id,
        "name" => OrderField::Name,
        "iso" => OrderField::Iso,
        _ => {
            return Err(FilterError::UnknownOrderingField {
                field: name.to_string(),
            })
        }
    };

    Ok(Ordering { field, descending })
}

fn column(field: OrderField) -> country::Column {
    match field {
        OrderField::Id => country::Column::Id,
        OrderField::Name => country::Column::Name,
        OrderField::Iso => country::Column::Iso,
    }
}

fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '%' | '_' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out
}

fn like_contains(s: &str) -> String {
    format!("%{}%", like_escape(s))
}

impl SelectFilter<country::Entity> for CountriesFilter {
    fn apply_predicate(&self, mut select: Select<country::Entity>) -> Select<country::Entity> {
        if let Some(ids) = &self.id_in {
            select = select.filter(country::Column::Id.is_in(ids.iter().copied()));
        }
        if let Some(pattern) = &self.name_ilike {
            // Lowercase both sides for a portable case-insensitive match.
            select = select.filter(
                Expr::expr(Func::lower(Expr::col(country::Column::Name)))
                    .like(like_contains(&pattern.to_lowercase())),
            );
        }
        if let Some(iso) = &self.iso {
            select = select.filter(country::Column::Iso.eq(iso.clone()));
        }
        select
    }

    fn apply_ordering(&self, mut select: Select<country::Entity>) -> Select<country::Entity> {
        for rule in &self.ordering {
            let col = column(rule.field);
            select = if rule.descending {
                select.order_by_desc(col)
            } else {
                select.order_by_asc(col)
            };
        }
        select
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ordering_is_name_ascending() {
        let filter = CountriesFilter::from_query(None, None, None, None).unwrap();
        assert_eq!(
            filter.ordering,
            vec![Ordering {
                field: OrderField::Name,
                descending: false
            }]
        );
    }

    #[test]
    fn ordering_parses_direction_prefixes() {
        let filter = CountriesFilter::from_query(None, None, None, Some("-name,iso")).unwrap();
        assert_eq!(
            filter.ordering,
            vec![
                Ordering {
                    field: OrderField::Name,
                    descending: true
                },
                Ordering {
                    field: OrderField::Iso,
                    descending: false
                },
            ]
        );
    }

    #[test]
    fn unknown_ordering_field_is_rejected() {
        let result = CountriesFilter::from_query(None, None, None, Some("population"));
        assert!(matches!(
            result,
            Err(FilterError::UnknownOrderingField { .. })
        ));
    }

    #[test]
    fn id_in_parses_comma_separated_ids() {
        let filter = CountriesFilter::from_query(Some("1, 2,3"), None, None, None).unwrap();
        assert_eq!(filter.id_in, Some(vec![1, 2, 3]));

        let result = CountriesFilter::from_query(Some("1,x"), None, None, None);
        assert!(matches!(result, Err(FilterError::InvalidId { .. })));
    }

    #[test]
    fn like_patterns_escape_wildcards() {
        assert_eq!(like_contains("50%"), "%50\\%%");
        assert_eq!(like_contains("a_b"), "%a\\_b%");
    }
}
