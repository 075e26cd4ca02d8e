use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use stop_core::{
    CoreResult, Mmsi, StopEvent, StopReportSink, error::error::ReportSnafu as SinkSnafu,
};
use tokio::{fs::File, io::AsyncWriteExt};

use crate::error::{
    Result,
    error::{CreateOutputSnafu, EncodeReportSnafu, WriteReportSnafu},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum FeatureCollectionType {
    FeatureCollection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum FeatureType {
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum GeometryType {
    Point,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: FeatureCollectionType,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub geometry: Geometry,
    pub properties: StopProperties,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geometry_type: GeometryType,
    /// Longitude first, as mandated by GeoJSON.
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StopProperties {
    pub name: Mmsi,
    #[serde(rename = "duration_sec")]
    pub duration_secs: i64,
    #[serde(rename = "date_UTC")]
    pub date_utc: DateTime<Utc>,
}

impl Default for FeatureCollection {
    fn default() -> Self {
        FeatureCollection {
            collection_type: FeatureCollectionType::FeatureCollection,
            features: Vec::new(),
        }
    }
}

impl From<StopEvent> for Feature {
    fn from(value: StopEvent) -> Self {
        let StopEvent {
            mmsi,
            position,
            duration_secs,
            timestamp,
        } = value;

        Feature {
            feature_type: FeatureType::Feature,
            geometry: Geometry {
                geometry_type: GeometryType::Point,
                coordinates: [position.longitude, position.latitude],
            },
            properties: StopProperties {
                name: mmsi,
                duration_secs,
                date_utc: timestamp,
            },
        }
    }
}

/// Collects stops and writes them as a single GeoJSON `FeatureCollection` once the run
/// completes.
#[derive(Debug)]
pub struct GeoJsonReport {
    path: PathBuf,
    file: File,
    collection: FeatureCollection,
}

impl GeoJsonReport {
    /// Creates (or truncates) the output file up front so an unwritable destination fails
    /// before any input is processed.
    pub async fn create(path: impl AsRef<Path>) -> Result<GeoJsonReport> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .await
            .with_context(|_| CreateOutputSnafu { path: path.clone() })?;

        Ok(GeoJsonReport {
            path,
            file,
            collection: FeatureCollection::default(),
        })
    }

    async fn write(&mut self) -> Result<()> {
        let mut bytes = serde_json::to_vec(&self.collection).context(EncodeReportSnafu)?;
        bytes.push(b'\n');

        self.file
            .write_all(&bytes)
            .await
            .with_context(|_| WriteReportSnafu {
                path: self.path.clone(),
            })?;
        self.file.flush().await.with_context(|_| WriteReportSnafu {
            path: self.path.clone(),
        })?;

        Ok(())
    }
}

#[async_trait]
impl StopReportSink for GeoJsonReport {
    async fn add_stop(&mut self, stop: StopEvent) -> CoreResult<()> {
        self.collection.features.push(Feature::from(stop));
        Ok(())
    }

    async fn complete(&mut self) -> CoreResult<()> {
        self.write().await.boxed().context(SinkSnafu)
    }
}
