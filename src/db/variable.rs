/*!
(The internal representation of) a variable.

Alongside its assignment and the ids of its incident edges, a variable
caches two kinds of derived quantity:

- The *subproducts* `p` and `m` --- running products of `1 − survey` over
  the enabled positive (resp. negative) incident edges, excluding any edge
  whose survey has saturated at one.
  Saturated edges are instead counted in `pzero`/`mzero`, so a survey
  touching one never zeroes a product it would later have to leave.
- The *biases* --- the probabilities that the variable is forced positive,
  forced negative, or unconstrained, derived from the subproducts and
  normalised to sum to one.

The subproducts are patched in place as surveys change and rebuilt from
scratch before each propagation run; the biases are recomputed on demand.
*/

use crate::{config::ZERO_EPSILON, db::EdgeId};

/// A variable of the formula.
#[derive(Clone, Debug)]
pub struct Variable {
    /// The assignment of the variable, if made.
    pub value: Option<bool>,

    /// Product of `1 − survey` over enabled positive edges with unsaturated surveys.
    pub p: f64,

    /// Product of `1 − survey` over enabled negative edges with unsaturated surveys.
    pub m: f64,

    /// A count of enabled positive edges whose survey has saturated at one.
    pub pzero: u32,

    /// A count of enabled negative edges whose survey has saturated at one.
    pub mzero: u32,

    /// The normalised bias towards a positive assignment.
    pub h_plus: f64,

    /// The normalised bias towards a negative assignment.
    pub h_minus: f64,

    /// The normalised bias towards neither assignment.
    pub h_zero: f64,

    /// The strength of the preference between the two assignments, `|h_plus − h_minus|`.
    pub eval: f64,

    /// The edges incident to the variable.
    pub edges: Vec<EdgeId>,
}

impl Variable {
    pub fn fresh() -> Self {
        Variable {
            value: None,

            p: 1.0,
            m: 1.0,
            pzero: 0,
            mzero: 0,

            h_plus: 0.0,
            h_minus: 0.0,
            h_zero: 0.0,
            eval: 0.0,

            edges: Vec::default(),
        }
    }

    /// Whether the variable has been assigned a value.
    pub fn assigned(&self) -> bool {
        self.value.is_some()
    }

    /// Clears the cached subproducts, ready for a rebuild.
    pub fn reset_subproducts(&mut self) {
        self.p = 1.0;
        self.m = 1.0;
        self.pzero = 0;
        self.mzero = 0;
    }

    /// Folds the survey of an enabled incident edge into the subproducts.
    pub fn absorb_survey(&mut self, polarity: bool, survey: f64) {
        let (product, saturated) = match polarity {
            true => (&mut self.p, &mut self.pzero),
            false => (&mut self.m, &mut self.mzero),
        };

        if 1.0 - survey > ZERO_EPSILON {
            *product *= 1.0 - survey;
        } else {
            *saturated += 1;
        }
    }

    /// Patches the subproducts for an edge whose survey moved from `old` to `new`.
    ///
    /// Four cases, by whether the old and new surveys saturate at one.
    /// Saturated surveys are held in the counters rather than the products, so
    /// a move across the saturation boundary transfers the factor between the
    /// two.
    pub fn patch_survey(&mut self, polarity: bool, old: f64, new: f64) {
        let (product, saturated) = match polarity {
            true => (&mut self.p, &mut self.pzero),
            false => (&mut self.m, &mut self.mzero),
        };

        if 1.0 - old > ZERO_EPSILON {
            if 1.0 - new > ZERO_EPSILON {
                *product *= (1.0 - new) / (1.0 - old);
            } else {
                *product /= 1.0 - old;
                *saturated += 1;
            }
        } else if 1.0 - new > ZERO_EPSILON {
            *product *= 1.0 - new;
            *saturated -= 1;
        }
    }

    /// Derives the normalised biases and the evaluation value from the subproducts.
    ///
    /// With `P` and `M` the subproducts collapsed to zero on any saturation,
    /// the raw weights are `Hz = P·M`, `Hp = M − Hz`, `Hm = P − Hz`.
    /// Their sum is positive for any variable with an enabled edge once unit
    /// clauses have been propagated, and a zero sum is a bug upstream.
    pub fn evaluate_bias(&mut self) {
        let p = if self.pzero > 0 { 0.0 } else { self.p };
        let m = if self.mzero > 0 { 0.0 } else { self.m };

        let h_zero = p * m;
        let h_plus = m - h_zero;
        let h_minus = p - h_zero;

        let sum = h_plus + h_minus + h_zero;
        debug_assert!(sum > 0.0);

        self.h_zero = h_zero / sum;
        self.h_plus = h_plus / sum;
        self.h_minus = h_minus / sum;

        self.eval = (self.h_plus - self.h_minus).abs();
    }
}
