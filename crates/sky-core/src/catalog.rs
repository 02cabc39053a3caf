//! Immutable star catalog shared read-only across sphere instances.

use crate::error::SkyError;
use crate::point::{dec_to_rad, ra_to_rad};

/// Pre-computed catalog: star positions in radians (azimuth, polar) and
/// constellation segments as index pairs into the star list.
///
/// A catalog is never mutated after construction; every sphere builds its
/// own independent `SkyPoint` copies from it.
#[derive(Clone, Debug)]
pub struct Catalog {
    stars: Vec<[f64; 2]>,
    lines: Vec<[usize; 2]>,
}

impl Catalog {
    /// Build a catalog from radian star pairs and segment index pairs.
    /// A segment index outside the star list is rejected.
    pub fn new(stars: Vec<[f64; 2]>, lines: Vec<[usize; 2]>) -> Result<Self, SkyError> {
        for line in &lines {
            for &idx in line {
                if idx >= stars.len() {
                    return Err(SkyError::InvalidArgument(format!(
                        "segment references star {idx} but catalog has {}",
                        stars.len()
                    )));
                }
            }
        }
        Ok(Self { stars, lines })
    }

    /// An empty catalog (no stars, no segments).
    pub fn empty() -> Self {
        Self {
            stars: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// The bundled default catalog: a handful of well-known constellations
    /// and bright first-magnitude stars, converted from the usual
    /// hours/degrees units at construction.
    pub fn builtin() -> Self {
        let stars = BUILTIN_STARS
            .iter()
            .map(|&[ra_h, dec_d]| [ra_to_rad(ra_h), dec_to_rad(dec_d)])
            .collect();
        let lines = BUILTIN_LINES.iter().map(|&[a, b]| [a, b]).collect();
        Self { stars, lines }
    }

    pub fn stars(&self) -> &[[f64; 2]] {
        &self.stars
    }

    pub fn lines(&self) -> &[[usize; 2]] {
        &self.lines
    }
}

// Bright-star positions as (right ascension hours, declination degrees),
// J2000, rounded to ~0.01. Indices below refer to this table.
const BUILTIN_STARS: &[[f64; 2]] = &[
    // Orion
    [5.92, 7.41],    // 0 Betelgeuse
    [5.24, -8.20],   // 1 Rigel
    [5.42, 6.35],    // 2 Bellatrix
    [5.53, -0.30],   // 3 Mintaka
    [5.60, -1.20],   // 4 Alnilam
    [5.68, -1.94],   // 5 Alnitak
    [5.80, -9.67],   // 6 Saiph
    // Ursa Major (Big Dipper)
    [11.06, 61.75],  // 7 Dubhe
    [11.03, 56.38],  // 8 Merak
    [11.90, 53.69],  // 9 Phecda
    [12.26, 57.03],  // 10 Megrez
    [12.90, 55.96],  // 11 Alioth
    [13.40, 54.93],  // 12 Mizar
    [13.79, 49.31],  // 13 Alkaid
    // Cassiopeia
    [0.15, 59.15],   // 14 Caph
    [0.68, 56.54],   // 15 Schedar
    [0.95, 60.72],   // 16 Gamma Cas
    [1.43, 60.24],   // 17 Ruchbah
    [1.91, 63.67],   // 18 Segin
    // Crux
    [12.44, -63.10], // 19 Acrux
    [12.80, -59.69], // 20 Mimosa
    [12.52, -57.11], // 21 Gacrux
    [12.25, -58.75], // 22 Delta Crucis
    // Cygnus
    [20.69, 45.28],  // 23 Deneb
    [20.37, 40.26],  // 24 Sadr
    [20.77, 33.97],  // 25 Gienah
    [19.75, 45.13],  // 26 Delta Cyg
    [19.51, 27.96],  // 27 Albireo
    // Assorted bright stars
    [18.62, 38.78],  // 28 Vega
    [6.75, -16.72],  // 29 Sirius
    [7.66, 5.22],    // 30 Procyon
    [4.60, 16.51],   // 31 Aldebaran
    [5.28, 46.00],   // 32 Capella
    [2.53, 89.26],   // 33 Polaris
    [14.26, 19.18],  // 34 Arcturus
    [13.42, -11.16], // 35 Spica
    [16.49, -26.43], // 36 Antares
    [19.85, 8.87],   // 37 Altair
    [22.96, -29.62], // 38 Fomalhaut
    [6.40, -52.70],  // 39 Canopus
    [1.63, -57.24],  // 40 Achernar
    [14.66, -60.84], // 41 Alpha Centauri
];

const BUILTIN_LINES: &[[usize; 2]] = &[
    // Orion
    [0, 2],
    [2, 3],
    [3, 4],
    [4, 5],
    [5, 6],
    [6, 1],
    [1, 3],
    [0, 5],
    // Ursa Major
    [7, 8],
    [8, 9],
    [9, 10],
    [10, 7],
    [10, 11],
    [11, 12],
    [12, 13],
    // Cassiopeia
    [14, 15],
    [15, 16],
    [16, 17],
    [17, 18],
    // Crux
    [19, 21],
    [20, 22],
    // Cygnus
    [23, 24],
    [24, 25],
    [24, 26],
    [24, 27],
];
