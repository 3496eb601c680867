//! Binary space partitioning of the level rectangle into room candidates.

use crate::config::PartitionParams;
use crate::rng::GenerationRng;
use crate::types::Rect;

/// Split-axis bias: a node this much longer on one axis always splits across
/// that axis instead of rolling for it.
const ASPECT_BIAS: f64 = 1.25;

/// Minimum extent either child keeps in the split dimension.
const MIN_CHILD_EXTENT: i32 = 3;

/// Owned binary tree over the level rectangle. Leaves are room candidates.
pub(super) struct PartitionNode {
    pub(super) area: Rect,
    children: Option<Box<(PartitionNode, PartitionNode)>>,
}

impl PartitionNode {
    pub(super) fn new(area: Rect) -> Self {
        Self { area, children: None }
    }

    /// Recursively splits until depth runs out or either dimension would drop
    /// below what a padded minimum room needs. The axis draw happens before
    /// the aspect bias is applied so the stream advances identically for
    /// squat and elongated nodes.
    pub(super) fn split_recursive(
        &mut self,
        remaining_depth: u32,
        params: &PartitionParams,
        rng: &mut GenerationRng,
    ) {
        let min_width = params.min_room_width + params.padding * 2 + 2;
        let min_height = params.min_room_height + params.padding * 2 + 2;
        if remaining_depth == 0 || self.area.width < min_width || self.area.height < min_height {
            return;
        }

        let mut split_vertical = rng.coin_flip();
        if self.area.width as f64 / self.area.height as f64 > ASPECT_BIAS {
            split_vertical = true;
        }
        if self.area.height as f64 / self.area.width as f64 > ASPECT_BIAS {
            split_vertical = false;
        }

        let Some((left_area, right_area)) = split_areas(self.area, split_vertical, rng) else {
            return;
        };

        let mut left = PartitionNode::new(left_area);
        let mut right = PartitionNode::new(right_area);
        left.split_recursive(remaining_depth - 1, params, rng);
        right.split_recursive(remaining_depth - 1, params, rng);
        self.children = Some(Box::new((left, right)));
    }

    /// Leaf areas in depth-first order (left subtree before right).
    pub(super) fn leaves(&self) -> Vec<Rect> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, leaves: &mut Vec<Rect>) {
        match &self.children {
            None => leaves.push(self.area),
            Some(children) => {
                children.0.collect_leaves(leaves);
                children.1.collect_leaves(leaves);
            }
        }
    }
}

fn split_areas(area: Rect, split_vertical: bool, rng: &mut GenerationRng) -> Option<(Rect, Rect)> {
    if split_vertical {
        let max_cut = area.width - MIN_CHILD_EXTENT;
        if max_cut <= MIN_CHILD_EXTENT {
            return None;
        }
        let cut = rng.range_i32(MIN_CHILD_EXTENT, max_cut);
        Some((
            Rect { x: area.x, y: area.y, width: cut, height: area.height },
            Rect { x: area.x + cut, y: area.y, width: area.width - cut, height: area.height },
        ))
    } else {
        let max_cut = area.height - MIN_CHILD_EXTENT;
        if max_cut <= MIN_CHILD_EXTENT {
            return None;
        }
        let cut = rng.range_i32(MIN_CHILD_EXTENT, max_cut);
        Some((
            Rect { x: area.x, y: area.y, width: area.width, height: cut },
            Rect { x: area.x, y: area.y + cut, width: area.width, height: area.height - cut },
        ))
    }
}
