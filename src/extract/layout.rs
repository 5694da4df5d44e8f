//! Landmark windows inside an operation section
//!
//! A landmark is a group heading (parameter groups, request body, responses)
//! recognized by an `h1`..`h6` element whose text begins with its marker,
//! followed by a child tag or a colon. Prose elements never open a landmark.
//! Each landmark owns the markup from the end of its marker to the start of
//! the next landmark.

use crate::config::MarkerConfig;
use crate::model::ParameterLocation;
use crate::ParseResult;
use regex::{Regex, RegexBuilder};

/// Group headings an operation section may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landmark {
    Parameters(ParameterLocation),
    RequestBody,
    Responses,
}

/// Compiled heading patterns for every landmark
#[derive(Debug, Clone)]
pub struct LandmarkPatterns {
    patterns: Vec<(Landmark, Regex)>,
}

impl LandmarkPatterns {
    pub fn compile(markers: &MarkerConfig) -> ParseResult<Self> {
        let entries = [
            (
                Landmark::Parameters(ParameterLocation::Query),
                &markers.query_parameters,
            ),
            (
                Landmark::Parameters(ParameterLocation::Path),
                &markers.path_parameters,
            ),
            (
                Landmark::Parameters(ParameterLocation::Header),
                &markers.header_parameters,
            ),
            (Landmark::RequestBody, &markers.request_body),
            (Landmark::Responses, &markers.responses),
        ];

        let mut patterns = Vec::with_capacity(entries.len());
        for (landmark, marker) in entries {
            // Heading text must open with the marker, up to a child tag or a colon
            let re = RegexBuilder::new(&format!(
                r"<h[1-6]\b[^>]*>\s*({})\s*[<:]",
                regex::escape(marker)
            ))
            .case_insensitive(true)
            .build()?;
            patterns.push((landmark, re));
        }

        Ok(Self { patterns })
    }
}

/// Landmark positions found in one section
#[derive(Debug)]
pub struct SectionLayout<'a> {
    html: &'a str,
    /// (landmark, heading start, heading end), ordered by start
    found: Vec<(Landmark, usize, usize)>,
}

impl<'a> SectionLayout<'a> {
    /// Locates the first occurrence of every landmark in `html`
    pub fn locate(html: &'a str, patterns: &LandmarkPatterns) -> Self {
        let mut found: Vec<(Landmark, usize, usize)> = patterns
            .patterns
            .iter()
            .filter_map(|(landmark, re)| {
                let caps = re.captures(html)?;
                let heading = caps.get(0)?;
                let marker = caps.get(1)?;
                Some((*landmark, heading.start(), marker.end()))
            })
            .collect();
        found.sort_by_key(|(_, start, _)| *start);

        Self { html, found }
    }

    #[cfg(test)]
    pub fn contains(&self, landmark: Landmark) -> bool {
        self.found.iter().any(|(l, _, _)| *l == landmark)
    }

    /// Markup owned by `landmark`, or None when the section lacks it
    pub fn window(&self, landmark: Landmark) -> Option<&'a str> {
        let (_, _, end) = self.found.iter().find(|(l, _, _)| *l == landmark)?;
        let stop = self
            .found
            .iter()
            .map(|(_, start, _)| *start)
            .find(|start| start >= end)
            .unwrap_or(self.html.len());
        Some(&self.html[*end..stop])
    }

    /// Markup before the first landmark
    pub fn head(&self) -> &'a str {
        let stop = self
            .found
            .first()
            .map(|(_, start, _)| *start)
            .unwrap_or(self.html.len());
        &self.html[..stop]
    }
}
