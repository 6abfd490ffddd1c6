use serde::Deserialize;

/// 学籍筛选条件（专业 / 学年 / 学期），全部可选
///
/// 查询字符串中的空值（`branch_id=`）按未提供处理。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AcademicFilter {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub branch_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub year_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub semester_id: Option<i64>,
}

/// 完整的学籍范围（三项都必须提供）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AcademicScope {
    #[serde(deserialize_with = "deserialize_id")]
    pub branch_id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub year_id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub semester_id: i64,
}

struct IdVisitor;

impl<'de> serde::de::Visitor<'de> for IdVisitor {
    type Value = Option<i64>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Some(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(value)
            .map(Some)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        value
            .parse()
            .map(Some)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(value), &self))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }
}

// 表单下拉框提交的 ID 往往是字符串，这里同时接受数字和数字字符串
pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_any(IdVisitor)
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserialize_optional_id(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("identifier must not be empty"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[test]
    fn test_filter_treats_empty_as_none() {
        let filter = Query::<AcademicFilter>::from_query("branch_id=&year_id=2")
            .expect("parse filter")
            .into_inner();
        assert_eq!(filter.branch_id, None);
        assert_eq!(filter.year_id, Some(2));
        assert_eq!(filter.semester_id, None);
    }

    #[test]
    fn test_scope_accepts_numeric_strings_and_numbers() {
        let scope: AcademicScope =
            serde_json::from_str(r#"{"branch_id":"3","year_id":1,"semester_id":"2"}"#)
                .expect("parse scope");
        assert_eq!(
            scope,
            AcademicScope {
                branch_id: 3,
                year_id: 1,
                semester_id: 2
            }
        );
    }

    #[test]
    fn test_scope_rejects_missing_or_garbage() {
        assert!(Query::<AcademicScope>::from_query("branch_id=1&year_id=2").is_err());
        assert!(
            Query::<AcademicScope>::from_query("branch_id=x&year_id=2&semester_id=1").is_err()
        );
    }
}
