use crate::convert::{Conversion, ImageArtifact};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertReport {
    pub input: InputReport,
    pub ok: bool,
    pub error: Option<String>,
    pub artifact: Option<ArtifactReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputReport {
    pub name: String,
    pub file_bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactReport {
    pub name: String,
    pub mime: String,
    pub file_bytes: u64,
}

impl ConvertReport {
    pub fn from_conversion(name: &str, input_bytes: u64, conversion: &Conversion) -> Self {
        Self {
            input: InputReport {
                name: name.to_string(),
                file_bytes: input_bytes,
            },
            ok: conversion.is_ok(),
            error: conversion.error.clone(),
            artifact: conversion.artifact.as_ref().map(ArtifactReport::from),
        }
    }
}

impl From<&ImageArtifact> for ArtifactReport {
    fn from(artifact: &ImageArtifact) -> Self {
        Self {
            name: artifact.name.clone(),
            mime: artifact.mime.clone(),
            file_bytes: artifact.bytes.len() as u64,
        }
    }
}
