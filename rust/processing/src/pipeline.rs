// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion pipeline: kernel output to wireframe and centerline scripts.

use crate::config::{FailurePolicy, PipelineConfig};
use crate::error::{Error, Result};
use crate::kernel::{ElementGeometry, ElementKey, ElementType, GeometryKernel, TypeGeometry};
use crate::mesh_dump::MeshDumpKernel;
use crate::scr::ScrWriter;
use ifc_scr_geometry::{decode_mesh, idealize_beam, idealize_column, IdealizeOptions, Segment};
use rayon::prelude::*;
use std::io::Write;
use std::path::Path;

/// One element after decoding and idealization.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedElement {
    pub key: ElementKey,
    pub element_type: ElementType,
    pub wireframe: Vec<Segment>,
    /// Centerline, or why the wireframe could not be reduced to one
    pub idealized: ifc_scr_geometry::Result<Segment>,
}

/// Counters for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub beams: usize,
    pub columns: usize,
    pub segments_written: usize,
    pub centerlines_written: usize,
    /// Elements whose centerline was skipped
    pub skipped: usize,
}

impl ProcessingStats {
    pub fn elements(&self) -> usize {
        self.beams + self.columns
    }

    fn count(&mut self, element_type: ElementType) {
        match element_type {
            ElementType::Beam => self.beams += 1,
            ElementType::Column => self.columns += 1,
        }
    }
}

/// Decode one element and idealize it with its type's algorithm.
///
/// A malformed mesh is an error; an idealization failure is carried in
/// [`ProcessedElement::idealized`] for the caller's policy to handle.
pub fn process_element(
    element: &ElementGeometry,
    options: &IdealizeOptions,
) -> Result<ProcessedElement> {
    let key = element.key();
    let wireframe = match decode_mesh(&element.vertices, &element.edges) {
        Ok(segments) => segments,
        Err(source) => return Err(Error::Element { key, source }),
    };

    let idealized = match element.element_type {
        ElementType::Beam => idealize_beam(&wireframe, options),
        ElementType::Column => idealize_column(&wireframe, options),
    };

    Ok(ProcessedElement {
        key,
        element_type: element.element_type,
        wireframe,
        idealized,
    })
}

/// Run every element of `geometry` through decode/idealize and append the
/// results to the two scripts, in enumeration order.
pub fn convert_geometry<F: Write, I: Write>(
    geometry: &[TypeGeometry],
    config: &PipelineConfig,
    full: &mut ScrWriter<F>,
    ideal: &mut ScrWriter<I>,
) -> Result<ProcessingStats> {
    let options = config.idealize_options();
    let mut stats = ProcessingStats::default();

    for group in geometry {
        tracing::info!(
            element_type = %group.element_type,
            count = group.elements.len(),
            parallel = config.parallel,
            "Processing elements"
        );

        // Indexed collect keeps enumeration order on the parallel path
        let processed: Vec<Result<ProcessedElement>> = if config.parallel {
            group
                .elements
                .par_iter()
                .map(|element| process_element(element, &options))
                .collect()
        } else {
            group
                .elements
                .iter()
                .map(|element| process_element(element, &options))
                .collect()
        };

        for result in processed {
            let element = result?;
            stats.count(element.element_type);

            full.write_segments(&element.wireframe)?;
            stats.segments_written += element.wireframe.len();

            match element.idealized {
                Ok(line) => {
                    ideal.write_segment(&line)?;
                    stats.centerlines_written += 1;
                }
                Err(source) => match config.on_idealization_error {
                    FailurePolicy::Skip => {
                        tracing::warn!(element = %element.key, error = %source, "Skipping centerline");
                        stats.skipped += 1;
                    }
                    FailurePolicy::Abort => {
                        return Err(Error::Element {
                            key: element.key,
                            source,
                        });
                    }
                },
            }

            tracing::debug!(
                element = %element.key,
                segments = element.wireframe.len(),
                "Processed element"
            );
        }
    }

    Ok(stats)
}

/// Kernel + configuration, ready to convert model files.
pub struct Pipeline<K> {
    kernel: K,
    config: PipelineConfig,
}

impl<K: GeometryKernel> Pipeline<K> {
    pub fn new(kernel: K, config: PipelineConfig) -> Self {
        Self { kernel, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Convert `model` into a full wireframe script and a centerline script.
    ///
    /// Both outputs are truncated once the kernel has read the model.
    pub fn run(&self, model: &Path, full_out: &Path, ideal_out: &Path) -> Result<ProcessingStats> {
        let start = std::time::Instant::now();
        tracing::info!(
            model = %model.display(),
            types = ?self.config.element_types,
            world_coords = self.config.use_world_coords,
            "Reading element geometry"
        );

        let geometry = self.kernel.read_geometry(
            model,
            &self.config.element_types,
            &self.config.kernel_settings(),
        )?;

        let mut full = ScrWriter::create(full_out)?;
        let mut ideal = ScrWriter::create(ideal_out)?;
        let stats = convert_geometry(&geometry, &self.config, &mut full, &mut ideal)?;
        full.finish()?;
        ideal.finish()?;

        tracing::info!(
            beams = stats.beams,
            columns = stats.columns,
            segments = stats.segments_written,
            centerlines = stats.centerlines_written,
            skipped = stats.skipped,
            elapsed_ms = start.elapsed().as_millis(),
            full = %full_out.display(),
            ideal = %ideal_out.display(),
            "Conversion complete"
        );

        Ok(stats)
    }
}

/// Convert a mesh dump into `full_out` and `ideal_out` using the
/// environment configuration.
pub fn process_file(
    input: impl AsRef<Path>,
    full_out: impl AsRef<Path>,
    ideal_out: impl AsRef<Path>,
) -> Result<ProcessingStats> {
    Pipeline::new(MeshDumpKernel::new(), PipelineConfig::from_env()).run(
        input.as_ref(),
        full_out.as_ref(),
        ideal_out.as_ref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scr::render;
    use ifc_scr_geometry::{IdealizationFailure, MeshDefect};

    fn element(element_type: ElementType, id: &str, vertices: Vec<f64>, edges: Vec<u32>) -> ElementGeometry {
        ElementGeometry {
            element_type,
            global_id: id.into(),
            tag: "T".into(),
            vertices,
            edges,
        }
    }

    fn flat_beam(id: &str) -> ElementGeometry {
        // Two top chords at z=10, one bottom chord at z=0
        element(
            ElementType::Beam,
            id,
            vec![
                0.0, 0.0, 10.0, 4.0, 0.0, 10.0, //
                0.0, 2.0, 10.0, 4.0, 2.0, 10.0, //
                0.0, 0.0, 0.0, 4.0, 0.0, 0.0,
            ],
            vec![0, 1, 2, 3, 4, 5, 1, 0],
        )
    }

    fn sloped_beam(id: &str) -> ElementGeometry {
        element(
            ElementType::Beam,
            id,
            vec![0.0, 0.0, 0.0, 5.0, 0.0, 1.0],
            vec![0, 1],
        )
    }

    fn run(geometry: &[TypeGeometry], config: &PipelineConfig) -> Result<(String, String, ProcessingStats)> {
        let mut full = ScrWriter::new(Vec::new(), "full.scr")?;
        let mut ideal = ScrWriter::new(Vec::new(), "ideal.scr")?;
        let stats = convert_geometry(geometry, config, &mut full, &mut ideal)?;
        let full = String::from_utf8(full.finish()?).unwrap();
        let ideal = String::from_utf8(ideal.finish()?).unwrap();
        Ok((full, ideal, stats))
    }

    #[test]
    fn test_process_element_dedups_and_idealizes() {
        let processed = process_element(&flat_beam("b"), &IdealizeOptions::default()).unwrap();

        assert_eq!(processed.wireframe.len(), 3);
        assert_eq!(
            processed.idealized,
            Ok(Segment::from_coords((2.0, 0.0, 10.0), (2.0, 2.0, 10.0)))
        );
        assert_eq!(processed.key.as_str(), "UUID: b Tag:T");
    }

    #[test]
    fn test_malformed_mesh_carries_element_key() {
        let bad = element(ElementType::Column, "c", vec![0.0; 6], vec![0, 2]);
        let err = process_element(&bad, &IdealizeOptions::default()).unwrap_err();

        match err {
            Error::Element { key, source } => {
                assert_eq!(key.as_str(), "UUID: c Tag:T");
                assert_eq!(
                    source,
                    ifc_scr_geometry::Error::MalformedMesh(MeshDefect::IndexOutOfRange {
                        index: 2,
                        vertex_count: 2
                    })
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_geometry_writes_header_and_footer() {
        let geometry = vec![
            TypeGeometry::new(ElementType::Beam),
            TypeGeometry::new(ElementType::Column),
        ];
        let (full, ideal, stats) = run(&geometry, &PipelineConfig::default()).unwrap();

        assert_eq!(full, render(&[]));
        assert_eq!(ideal, render(&[]));
        assert_eq!(stats, ProcessingStats::default());
    }

    #[test]
    fn test_skip_policy_keeps_wireframe() {
        let geometry = vec![TypeGeometry {
            element_type: ElementType::Beam,
            elements: vec![sloped_beam("s"), flat_beam("b")],
        }];
        let (full, ideal, stats) = run(&geometry, &PipelineConfig::default()).unwrap();

        assert_eq!(stats.beams, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.centerlines_written, 1);
        assert_eq!(stats.segments_written, 4);
        assert!(full.contains("line 0,0,0 5,0,1\n"));
        assert_eq!(
            ideal,
            render(&[Segment::from_coords((2.0, 0.0, 10.0), (2.0, 2.0, 10.0))])
        );
    }

    #[test]
    fn test_abort_policy_fails_run() {
        let geometry = vec![TypeGeometry {
            element_type: ElementType::Beam,
            elements: vec![flat_beam("b"), sloped_beam("s")],
        }];
        let config = PipelineConfig {
            on_idealization_error: FailurePolicy::Abort,
            ..PipelineConfig::default()
        };

        match run(&geometry, &config).unwrap_err() {
            Error::Element { key, source } => {
                assert_eq!(key.as_str(), "UUID: s Tag:T");
                assert!(matches!(
                    source,
                    ifc_scr_geometry::Error::Idealization(IdealizationFailure::NoTopLines { .. })
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parallel_output_matches_sequential() {
        let elements: Vec<_> = (0..64)
            .map(|i| {
                if i % 7 == 0 {
                    sloped_beam(&format!("s{i}"))
                } else {
                    flat_beam(&format!("b{i}"))
                }
            })
            .collect();
        let geometry = vec![TypeGeometry {
            element_type: ElementType::Beam,
            elements,
        }];

        let sequential = run(&geometry, &PipelineConfig::default()).unwrap();
        let parallel = run(
            &geometry,
            &PipelineConfig {
                parallel: true,
                ..PipelineConfig::default()
            },
        )
        .unwrap();

        assert_eq!(sequential, parallel);
    }
}
