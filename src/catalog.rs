// Catalog I/O: JSON input for states and packages, XML output for consolidated packages

use crate::model::{ChildPackage, Package, State};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

pub const SAMPLE_STATES_PATH: &str = "samples/states.json";
pub const SAMPLE_PACKAGES_PATH: &str = "samples/packages.json";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Conversion error: {0}")]
    ConversionError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

fn parse_json<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))
}

pub fn parse_states(json: &str) -> Result<Vec<State>, CatalogError> {
    parse_json(json)
}

pub fn parse_packages(json: &str) -> Result<Vec<Package>, CatalogError> {
    parse_json(json)
}

pub fn load_states(path: impl AsRef<Path>) -> Result<Vec<State>, CatalogError> {
    let path = path.as_ref();
    let states = parse_states(&std::fs::read_to_string(path)?)?;
    debug!(path = %path.display(), count = states.len(), "loaded states");
    Ok(states)
}

pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<Package>, CatalogError> {
    let path = path.as_ref();
    let packages = parse_packages(&std::fs::read_to_string(path)?)?;
    debug!(path = %path.display(), count = packages.len(), "loaded packages");
    Ok(packages)
}

// Structures for XML serialization
#[derive(Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
#[serde(rename = "Catalog")]
pub struct XmlCatalog {
    #[serde(rename = "@generatedAt")]
    pub generated_at: String,
    pub packages: XmlPackages,
}

#[derive(Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct XmlPackages {
    #[serde(rename = "Package")]
    pub packages: Vec<XmlPackage>,
}

#[derive(Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct XmlPackage {
    #[serde(rename = "@hotel")]
    pub hotel: String,
    #[serde(rename = "@flight")]
    pub flight: String,
    #[serde(rename = "@price")]
    pub price: String,
    pub children: XmlChildren,
}

#[derive(Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct XmlChildren {
    #[serde(rename = "Child")]
    pub children: Vec<XmlChild>,
}

#[derive(Debug, PartialEq, Default, Serialize)]
pub struct XmlChild {
    #[serde(rename = "@hotel")]
    pub hotel: String,
    #[serde(rename = "@flight")]
    pub flight: String,
    #[serde(rename = "@price")]
    pub price: String,
}

impl From<&ChildPackage> for XmlChild {
    fn from(child: &ChildPackage) -> Self {
        XmlChild {
            hotel: child.hotel().to_string(),
            flight: child.flight().to_string(),
            price: child.price().to_string(),
        }
    }
}

impl From<&Package> for XmlPackage {
    fn from(package: &Package) -> Self {
        XmlPackage {
            hotel: package.hotel().to_string(),
            flight: package.flight().to_string(),
            price: package.price().to_string(),
            children: XmlChildren {
                children: package.children().iter().map(XmlChild::from).collect(),
            },
        }
    }
}

/// Renders packages, usually the output of consolidation, as an XML catalog document.
pub fn export_xml(packages: &[Package], generated_at: DateTime<Utc>) -> Result<String, CatalogError> {
    let catalog = XmlCatalog {
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        packages: XmlPackages {
            packages: packages.iter().map(XmlPackage::from).collect(),
        },
    };

    let xml = quick_xml::se::to_string(&catalog)
        .map_err(|e| CatalogError::ConversionError(e.to_string()))?;

    info!(packages = packages.len(), bytes = xml.len(), "exported catalog");
    Ok(xml)
}
