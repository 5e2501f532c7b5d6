//! TSPLIB benchmark instances with known optimal tour lengths.
//!
//! Reference data for comparing strategies. The optimality gap is computed
//! here, on the instance, and never by the solvers themselves.

use crate::models::Point;

/// A named point set with its known optimal tour length.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkInstance {
    /// TSPLIB instance name.
    pub name: &'static str,
    /// City coordinates.
    pub points: Vec<Point>,
    /// Length of the proven optimal tour under `EUC_2D` distances.
    pub optimal: i64,
}

impl BenchmarkInstance {
    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.points.len()
    }

    /// Percentage by which `distance` exceeds the known optimum.
    ///
    /// ```
    /// let berlin = u_tsp::instances::berlin52();
    /// assert!((berlin.gap_percent(8296) - 10.0).abs() < 0.01);
    /// ```
    pub fn gap_percent(&self, distance: i64) -> f64 {
        (distance - self.optimal) as f64 / self.optimal as f64 * 100.0
    }
}

/// `berlin52`: 52 locations in Berlin (Groetschel). Optimal length 7542.
pub fn berlin52() -> BenchmarkInstance {
    BenchmarkInstance {
        name: "berlin52",
        points: to_points(&BERLIN52),
        optimal: 7542,
    }
}

/// `eil101`: 101-city problem (Christofides/Eilon). Optimal length 629.
pub fn eil101() -> BenchmarkInstance {
    BenchmarkInstance {
        name: "eil101",
        points: to_points(&EIL101),
        optimal: 629,
    }
}

/// All bundled instances.
pub fn all() -> Vec<BenchmarkInstance> {
    vec![berlin52(), eil101()]
}

fn to_points(coords: &[[f64; 2]]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

const BERLIN52: [[f64; 2]; 52] = [
    [565.0, 575.0],
    [25.0, 185.0],
    [345.0, 750.0],
    [945.0, 685.0],
    [845.0, 655.0],
    [880.0, 660.0],
    [25.0, 230.0],
    [525.0, 1000.0],
    [580.0, 1175.0],
    [650.0, 1130.0],
    [1605.0, 620.0],
    [1220.0, 580.0],
    [1465.0, 200.0],
    [1530.0, 5.0],
    [845.0, 680.0],
    [725.0, 370.0],
    [145.0, 665.0],
    [415.0, 635.0],
    [510.0, 875.0],
    [560.0, 365.0],
    [300.0, 465.0],
    [520.0, 585.0],
    [480.0, 415.0],
    [835.0, 625.0],
    [975.0, 580.0],
    [1215.0, 245.0],
    [1320.0, 315.0],
    [1250.0, 400.0],
    [660.0, 180.0],
    [410.0, 250.0],
    [420.0, 555.0],
    [575.0, 665.0],
    [1150.0, 1160.0],
    [700.0, 580.0],
    [685.0, 595.0],
    [685.0, 610.0],
    [770.0, 610.0],
    [795.0, 645.0],
    [720.0, 635.0],
    [760.0, 650.0],
    [475.0, 960.0],
    [95.0, 260.0],
    [875.0, 920.0],
    [700.0, 500.0],
    [555.0, 815.0],
    [830.0, 485.0],
    [1170.0, 65.0],
    [830.0, 610.0],
    [605.0, 625.0],
    [595.0, 360.0],
    [1340.0, 725.0],
    [1740.0, 245.0],
];

#[rustfmt::skip]
const EIL101: [[f64; 2]; 101] = [
    [41.0, 49.0], [35.0, 17.0], [55.0, 45.0], [55.0, 20.0], [15.0, 30.0],
    [25.0, 30.0], [20.0, 50.0], [10.0, 43.0], [55.0, 60.0], [30.0, 60.0],
    [20.0, 65.0], [50.0, 35.0], [30.0, 25.0], [15.0, 10.0], [30.0, 5.0],
    [10.0, 20.0], [5.0, 30.0], [20.0, 40.0], [15.0, 60.0], [45.0, 65.0],
    [45.0, 20.0], [45.0, 10.0], [55.0, 5.0], [65.0, 35.0], [65.0, 20.0],
    [45.0, 30.0], [35.0, 40.0], [41.0, 37.0], [64.0, 42.0], [40.0, 60.0],
    [31.0, 52.0], [35.0, 69.0], [53.0, 52.0], [65.0, 55.0], [63.0, 65.0],
    [2.0, 60.0], [20.0, 20.0], [5.0, 5.0], [60.0, 12.0], [40.0, 25.0],
    [42.0, 7.0], [24.0, 12.0], [23.0, 3.0], [11.0, 14.0], [6.0, 38.0],
    [2.0, 48.0], [8.0, 56.0], [13.0, 52.0], [6.0, 68.0], [47.0, 47.0],
    [49.0, 58.0], [27.0, 43.0], [37.0, 31.0], [57.0, 29.0], [63.0, 23.0],
    [53.0, 12.0], [32.0, 12.0], [36.0, 26.0], [21.0, 24.0], [17.0, 34.0],
    [12.0, 24.0], [24.0, 58.0], [27.0, 69.0], [15.0, 77.0], [62.0, 77.0],
    [49.0, 73.0], [67.0, 5.0], [56.0, 39.0], [37.0, 47.0], [37.0, 56.0],
    [57.0, 68.0], [47.0, 16.0], [44.0, 17.0], [46.0, 13.0], [49.0, 11.0],
    [49.0, 42.0], [53.0, 43.0], [61.0, 52.0], [57.0, 48.0], [56.0, 37.0],
    [55.0, 54.0], [15.0, 47.0], [14.0, 37.0], [11.0, 31.0], [16.0, 22.0],
    [4.0, 18.0], [28.0, 18.0], [26.0, 52.0], [26.0, 35.0], [31.0, 67.0],
    [15.0, 19.0], [22.0, 22.0], [18.0, 24.0], [26.0, 27.0], [25.0, 24.0],
    [22.0, 27.0], [25.0, 21.0], [19.0, 21.0], [20.0, 26.0], [18.0, 18.0],
    [35.0, 35.0],
];
