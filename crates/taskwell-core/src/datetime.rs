use chrono::NaiveDate;

pub const DUE_DATE_FORMAT: &str =
  "%Y-%m-%d";

#[must_use]
pub fn format_due_date(
  date: NaiveDate
) -> String {
  date
    .format(DUE_DATE_FORMAT)
    .to_string()
}

#[must_use]
pub fn parse_due_date(
  raw: &str
) -> Option<NaiveDate> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }
  NaiveDate::parse_from_str(
    trimmed,
    DUE_DATE_FORMAT
  )
  .ok()
}

pub mod due_date_serde {
  use chrono::NaiveDate;
  use serde::{
    Deserialize,
    Deserializer,
    Serializer
  };

  use super::DUE_DATE_FORMAT;

  pub fn serialize<S>(
    date: &NaiveDate,
    serializer: S
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer
  {
    serializer.serialize_str(
      &date
        .format(DUE_DATE_FORMAT)
        .to_string()
    )
  }

  pub fn deserialize<'de, D>(
    deserializer: D
  ) -> Result<NaiveDate, D::Error>
  where
    D: Deserializer<'de>
  {
    let raw = String::deserialize(
      deserializer
    )?;
    NaiveDate::parse_from_str(
      &raw,
      DUE_DATE_FORMAT
    )
    .map_err(serde::de::Error::custom)
  }

  pub mod option {
    use chrono::NaiveDate;
    use serde::{
      Deserialize,
      Deserializer,
      Serializer
    };

    use super::DUE_DATE_FORMAT;

    pub fn serialize<S>(
      date: &Option<NaiveDate>,
      serializer: S
    ) -> Result<S::Ok, S::Error>
    where
      S: Serializer
    {
      match date {
        | Some(value) => {
          super::serialize(
            value, serializer
          )
        }
        | None => {
          serializer.serialize_none()
        }
      }
    }

    pub fn deserialize<'de, D>(
      deserializer: D
    ) -> Result<
      Option<NaiveDate>,
      D::Error
    >
    where
      D: Deserializer<'de>
    {
      let opt =
        Option::<String>::deserialize(
          deserializer
        )?;
      match opt.as_deref() {
        | None | Some("") => Ok(None),
        | Some(raw) => {
          NaiveDate::parse_from_str(
            raw,
            DUE_DATE_FORMAT
          )
          .map(Some)
          .map_err(
            serde::de::Error::custom
          )
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::{
    format_due_date,
    parse_due_date
  };

  #[test]
  fn parses_and_formats_wire_dates() {
    let date = NaiveDate::from_ymd_opt(
      2026, 3, 14
    )
    .unwrap();
    assert_eq!(
      format_due_date(date),
      "2026-03-14"
    );
    assert_eq!(
      parse_due_date("2026-03-14"),
      Some(date)
    );
    assert_eq!(
      parse_due_date(" 2026-03-14 "),
      Some(date)
    );
  }

  #[test]
  fn rejects_blank_and_garbage() {
    assert_eq!(
      parse_due_date(""),
      None
    );
    assert_eq!(
      parse_due_date("   "),
      None
    );
    assert_eq!(
      parse_due_date("14/03/2026"),
      None
    );
  }
}
