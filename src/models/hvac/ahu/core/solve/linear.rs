//! Linearized process model.
//!
//! The air-handling process is written as 13 balance and control equations,
//! each linear in the unknowns once the saturation curve is replaced by its
//! tangent at a linearization temperature `θs0`:
//!
//! | row | element                  | equation                                  |
//! |-----|--------------------------|-------------------------------------------|
//! | 0   | mixing box, sensible     | `(m−mo)·c·θI + mo·c·θo = m·c·θ1`           |
//! | 1   | mixing box, latent       | `(m−mo)·l·wI + mo·l·wo = m·l·w1`           |
//! | 2   | cooling coil, sensible   | `(1−β)·m·c·(θ1 − θc) = Qsc`                |
//! | 3   | cooling coil, latent     | `(1−β)·m·l·(w1 − wc) = Qlc`                |
//! | 4   | cooling coil, saturation | `wc = ws(θs0) + ws'(θs0)·(θc − θs0)`       |
//! | 5   | bypass mixing, sensible  | `β·m·c·θ1 + (1−β)·m·c·θc = m·c·θ2`         |
//! | 6   | bypass mixing, latent    | `β·m·l·w1 + (1−β)·m·l·wc = m·l·w2`         |
//! | 7   | heating coil, sensible   | `m·c·(θS − θ2) = Qsh`                      |
//! | 8   | heating coil, latent     | `wS = w2`                                  |
//! | 9   | zone, sensible           | `m·c·(θS − θI) + (mi·c + UA)·(θo − θI) + Qsa + Qsc,cab = 0` |
//! | 10  | zone, latent             | `m·l·(wS − wI) + mi·l·(wo − wI) + Qla + Qlc,cab = 0` |
//! | 11  | temperature controller   | `Qsc = Kθ·(θIsp − θS)`                     |
//! | 12  | humidity controller      | `Qlc = Kw·(wIsp − wS)`                     |
//!
//! Index `c` is the coil outlet (apparatus dew point), `I` the zone, `S` the supply.

use nalgebra::{SMatrix, SVector};

use crate::support::psychro::Psychrometrics;

use super::super::{
    OperatingPoint,
    solution::{COIL_LATENT, COIL_SENSIBLE, HEATING, UNKNOWNS},
};

/// Specific heat of dry air, J/(kg·K).
pub const SPECIFIC_HEAT: f64 = 1.0e3;

/// Latent heat of vaporization of water, J/kg.
pub const LATENT_HEAT: f64 = 2496.0e3;

const T1: usize = 0;
const W1: usize = 1;
const T2: usize = 2;
const W2: usize = 3;
const TS: usize = 4;
const WS: usize = 5;
const TI: usize = 6;
const WI: usize = 7;
const TC: usize = 8;
const WC: usize = 9;

/// Coefficient matrix and right-hand side for one linearization temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    a: SMatrix<f64, UNKNOWNS, UNKNOWNS>,
    b: SVector<f64, UNKNOWNS>,
}

impl LinearSystem {
    /// Assembles the system for `point` with the saturation curve linearized
    /// at `linearization` (°C).
    pub fn assemble(
        point: &OperatingPoint,
        psychro: &impl Psychrometrics,
        linearization: f64,
    ) -> Self {
        let [
            m,
            mo,
            beta,
            k_theta,
            k_w,
            t_o,
            phi_o,
            _t_3,
            _w_3,
            t_sp,
            phi_sp,
            mi,
            ua,
            q_s_aux,
            q_l_aux,
            q_s_cab,
            q_l_cab,
        ] = point.to_array();

        let c = SPECIFIC_HEAT;
        let l = LATENT_HEAT;
        let w_o = psychro.humidity_ratio(t_o, phi_o);
        let w_sp = psychro.humidity_ratio(t_sp, phi_sp);
        let ws0 = psychro.saturation_humidity_ratio(linearization);
        let slope = psychro.saturation_slope(linearization);
        let coil = (1.0 - beta) * m;

        let mut a = SMatrix::<f64, UNKNOWNS, UNKNOWNS>::zeros();
        let mut b = SVector::<f64, UNKNOWNS>::zeros();

        a[(0, TI)] = (m - mo) * c;
        a[(0, T1)] = -m * c;
        b[0] = -mo * c * t_o;

        a[(1, WI)] = (m - mo) * l;
        a[(1, W1)] = -m * l;
        b[1] = -mo * l * w_o;

        a[(2, T1)] = coil * c;
        a[(2, COIL_SENSIBLE)] = -1.0;
        a[(2, TC)] = -coil * c;

        a[(3, W1)] = coil * l;
        a[(3, COIL_LATENT)] = -1.0;
        a[(3, WC)] = -coil * l;

        a[(4, WC)] = 1.0;
        a[(4, TC)] = -slope;
        b[4] = ws0 - slope * linearization;

        a[(5, T1)] = beta * m * c;
        a[(5, TC)] = coil * c;
        a[(5, T2)] = -m * c;

        a[(6, W1)] = beta * m * l;
        a[(6, WC)] = coil * l;
        a[(6, W2)] = -m * l;

        a[(7, T2)] = m * c;
        a[(7, HEATING)] = 1.0;
        a[(7, TS)] = -m * c;

        a[(8, W2)] = m * l;
        a[(8, WS)] = -m * l;

        a[(9, TS)] = m * c;
        a[(9, TI)] = -(m * c + mi * c + ua);
        b[9] = -q_s_cab - q_s_aux - (mi * c + ua) * t_o;

        a[(10, WS)] = m * l;
        a[(10, WI)] = -(m * l + mi * l);
        b[10] = -mi * l * w_o - q_l_cab - q_l_aux;

        a[(11, TS)] = k_theta;
        a[(11, COIL_SENSIBLE)] = 1.0;
        b[11] = k_theta * t_sp;

        a[(12, WS)] = k_w;
        a[(12, COIL_LATENT)] = 1.0;
        b[12] = k_w * w_sp;

        Self { a, b }
    }

    /// Coefficient matrix `A`.
    #[must_use]
    pub fn matrix(&self) -> &SMatrix<f64, UNKNOWNS, UNKNOWNS> {
        &self.a
    }

    /// Right-hand side `b`.
    #[must_use]
    pub fn rhs(&self) -> &SVector<f64, UNKNOWNS> {
        &self.b
    }

    /// Whether every coefficient is finite.
    ///
    /// Property evaluation far outside its range yields `NaN`, which must be
    /// caught before factorization.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.a.iter().chain(self.b.iter()).all(|v| v.is_finite())
    }

    /// Solves `A·x = b` by LU decomposition with partial pivoting.
    ///
    /// Returns `None` if the matrix is singular. A nearly singular matrix may
    /// still produce non-finite entries, which callers must check.
    #[must_use]
    pub fn solve(&self) -> Option<[f64; UNKNOWNS]> {
        let x = self.a.lu().solve(&self.b)?;
        let mut out = [0.0; UNKNOWNS];
        out.copy_from_slice(x.as_slice());
        Some(out)
    }

    /// Euclidean norm of `A·x − b`.
    #[must_use]
    pub fn residual_norm(&self, x: &[f64; UNKNOWNS]) -> f64 {
        let x = SVector::<f64, UNKNOWNS>::from_column_slice(x);
        (self.a * x - self.b).norm()
    }
}
