pub mod classification;
pub mod locale;
pub mod measure;
pub mod report;
pub mod result;
pub mod subject;
