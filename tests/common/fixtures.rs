//! Static station documents used across harnesses.

/// The single-ozone-reading document.
pub const DELHI_OZONE: &str = r#"{"name":"Delhi","results":{"collection1":[{"parameter":"Ozone","measuredValue":"42 µg/m3","date":"Monday, January 1, 2018","time":"10:00:00"}]}}"#;

/// A document where every record lacks a value.
pub const ALL_EMPTY: &str = r#"{"name":"Delhi","results":{"collection1":[
    {"parameter":"Ozone","measuredValue":" µg/m3","date":"Monday, January 1, 2018","time":"10:00:00"},
    {"parameter":"Nitrogen Dioxide","measuredValue":" µg/m3","date":"Monday, January 1, 2018","time":"10:00:00"}
]}}"#;

/// A realistic hourly snapshot mixing both parameter shapes, an empty
/// reading, and a pollutant without a canonical code.
pub const DELHI_SNAPSHOT: &str = r#"{
  "name": "Delhi",
  "count": 6,
  "lastrunstatus": "success",
  "results": {
    "collection1": [
      {"parameter": {"href": "http://feeds.test/p/pm25", "text": "Particulate Matter < 2.5 µg"},
       "measuredValue": "187 µg/m3", "date": "Tuesday, January 2, 2018", "time": "08:00:00"},
      {"parameter": {"href": "http://feeds.test/p/pm10", "text": "Particulate Matter < 10 µg"},
       "measuredValue": "312 µg/m3", "date": "Tuesday, January 2, 2018", "time": "08:00:00"},
      {"parameter": "Nitrogen Dioxide",
       "measuredValue": "64.5 µg/m3", "date": "Tuesday, January 2, 2018", "time": "08:00:00"},
      {"parameter": "Ozone",
       "measuredValue": " µg/m3", "date": "Tuesday, January 2, 2018", "time": "08:00:00"},
      {"parameter": "Carbon Monoxide",
       "measuredValue": "1.2 mg/m3", "date": "Tuesday, January 2, 2018", "time": "08:00:00"},
      {"parameter": "Sulfur Dioxide",
       "measuredValue": "9 µg/m3", "date": "Tuesday, January 2, 2018", "time": "08:15:00"}
    ]
  }
}"#;

/// Truncated JSON.
pub const MALFORMED: &str = "{not valid";

/// Well-formed JSON without `results.collection1`.
pub const NO_COLLECTION: &str = r#"{"name":"Delhi","results":{"collection2":[]}}"#;

/// A kept record whose date does not match the station format.
pub const BAD_DATE: &str = r#"{"name":"Delhi","results":{"collection1":[{"parameter":"Ozone","measuredValue":"42 µg/m3","date":"2018-01-01","time":"10:00:00"}]}}"#;
