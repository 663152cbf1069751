use std::str::FromStr;

use crate::contact::ContactRecord;
use crate::errors::ModelError;

pub const SORT_FIELDS: [&str; 2] = ["name", "phone"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Name,
    Phone,
}

impl SortField {
    pub fn key<'a>(&self, record: &'a ContactRecord) -> &'a str {
        match self {
            SortField::Name => &record.name,
            SortField::Phone => &record.phone,
        }
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "phone" => Ok(SortField::Phone),
            _ => Err(ModelError::Validation(format!(
                "Invalid sort field. Valid fields are: {}",
                SORT_FIELDS.join(", ")
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ModelError::Validation("Order must be 'asc' or 'desc'".into())),
        }
    }
}
