use itertools::Itertools;
use smallvec::SmallVec;

use crate::cells::Cartesian2DCoordinate;
use crate::errors::*;
use crate::grid::MazeGrid;
use crate::utils::{self, FnvHashMap};

/// Step counts from one start cell to every cell reachable from it.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: Cartesian2DCoordinate,
    distances: FnvHashMap<Cartesian2DCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    pub fn new(grid: &MazeGrid, start_coordinate: Cartesian2DCoordinate) -> Result<Distances> {
        let _ = grid.cell(start_coordinate)?;

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(grid.size().cells_count().0);
        distances.insert(start_coordinate, 0);

        // Every step is one from the previous cell, so the first time a cell is reached is
        // also the shortest distance to it. The map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {
                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for link_coordinate in grid.links(*cell_coord)?.iter() {
                    if !distances.contains_key(link_coordinate) {
                        distances.insert(*link_coordinate, distance_to_cell + 1);
                        new_frontier.push(*link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Ok(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Cartesian2DCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// None when the cell cannot be reached from the start.
    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: Cartesian2DCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    pub fn furthest_points_on_grid(&self) -> SmallVec<[Cartesian2DCoordinate; 8]> {
        self.distances.iter()
            .filter(|&(_, distance)| *distance == self.max_distance)
            .map(|(coord, _)| *coord)
            .sorted()
            .collect()
    }
}

/// Walk back from `end_point` to the start through ever closer linked cells.
///
/// Returns the path start first, or None if `end_point` is unreachable.
pub fn shortest_path(grid: &MazeGrid,
                     distances_from_start: &Distances,
                     end_point: Cartesian2DCoordinate)
                     -> Option<Vec<Cartesian2DCoordinate>> {
    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;
    let mut path = vec![end_point];
    let mut current_coord = end_point;

    while current_coord != distances_from_start.start() {
        let closer = grid.links(current_coord)
            .ok()?
            .iter()
            .cloned()
            .filter_map(|coord| distances_from_start.distance_from_start_to(coord).map(|d| (coord, d)))
            .min_by_key(|&(_, distance)| distance);

        match closer {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance => {
                current_coord = closer_coord;
                current_distance = closer_distance;
                path.push(current_coord);
            }
            // The distances were not computed for this grid.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// The exit with the shortest walk from the origin and the walk itself.
pub fn nearest_exit(grid: &MazeGrid) -> Result<Option<Vec<Cartesian2DCoordinate>>> {
    let distances = Distances::new(grid, grid.origin())?;
    let nearest = grid.exits()
        .into_iter()
        .filter_map(|exit| distances.distance_from_start_to(exit).map(|d| (exit, d)))
        .min_by_key(|&(_, distance)| distance);

    Ok(nearest.and_then(|(exit, _)| shortest_path(grid, &distances, exit)))
}
