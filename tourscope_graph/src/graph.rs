// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Line, Point, Rect, Size};
use tourscope_scale::CoordinateMapper;

use crate::error::TourError;

/// A directed tour edge between two node indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    /// Index of the node the edge leaves.
    pub source: usize,
    /// Index of the node the edge enters.
    pub target: usize,
}

/// A validated tour: domain-space nodes plus one link per node.
///
/// Node identity is array position. The link set always has exactly one
/// entry per node, including the edge that closes the tour.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TourGraph {
    nodes: Vec<Point>,
    links: Vec<Link>,
}

impl TourGraph {
    /// An empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph with a link `i -> path[i]` for every node `i`.
    ///
    /// Fails if the lengths differ or any entry is not a valid node index.
    pub fn from_tour(points: &[Point], path: &[usize]) -> Result<Self, TourError> {
        if points.len() != path.len() {
            return Err(TourError::LengthMismatch {
                points: points.len(),
                path: path.len(),
            });
        }
        let links = path
            .iter()
            .enumerate()
            .map(|(source, &target)| {
                if target < points.len() {
                    Ok(Link { source, target })
                } else {
                    Err(TourError::IndexOutOfBounds {
                        position: source,
                        index: target,
                        len: points.len(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            nodes: points.to_vec(),
            links,
        })
    }

    /// Domain-space node positions.
    #[must_use]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Tour links, one per node.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if there are no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Mapper from this graph's domain bounds into a render extent.
    #[must_use]
    pub fn mapper(&self, extent: Size) -> CoordinateMapper {
        CoordinateMapper::from_points(&self.nodes, extent)
    }

    /// Maps every node into render space for `extent`.
    #[must_use]
    pub fn map_to_extent(&self, extent: Size) -> MappedGraph {
        let mapper = self.mapper(extent);
        MappedGraph {
            nodes: mapper.map_points(&self.nodes),
            links: self.links.clone(),
            mapper,
        }
    }
}

/// A tour graph in render space.
///
/// Produced by [`TourGraph::map_to_extent`]. Links still refer to nodes by
/// index, so both ends of a segment are read from the same mapped array the
/// nodes are drawn from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MappedGraph {
    nodes: Vec<Point>,
    links: Vec<Link>,
    mapper: CoordinateMapper,
}

impl MappedGraph {
    /// Render-space node positions.
    #[must_use]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Tour links.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The mapper that produced these positions.
    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        self.mapper
    }

    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// One line per link, from source to target position.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        self.links.iter().filter_map(|link| {
            let p0 = *self.nodes.get(link.source)?;
            let p1 = *self.nodes.get(link.target)?;
            Some(Line::new(p0, p1))
        })
    }

    /// Bounding box of the node positions, or `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let (first, rest) = self.nodes.split_first()?;
        Some(
            rest.iter()
                .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p)),
        )
    }
}
