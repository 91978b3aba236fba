use crate::core::colour_mapping::kinds::Gradient;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::data::colour::Rgba;

impl ColourMap for Gradient {
    /// Only the low 8 bits of the count select the colour, so every scheme
    /// repeats with period 256. Alpha is always 0.
    fn map(&self, iterations: u32) -> Rgba {
        let n = iterations as u8;

        match self {
            Self::Ember => linear(n, 13, 7, 3),
            Self::Ice => linear(n, 3, 7, 13),
            Self::SineBands => sine_bands(n),
            Self::Ramps => ramps(n),
            Self::Tiers => tiers(n),
            Self::Mixed => mixed(n),
            Self::Inverted => {
                let Rgba { r, g, b, .. } = linear(n, 1, 5, 10);
                Rgba::rgb(255 - r, 255 - g, 255 - b)
            }
        }
    }

    fn display_name(&self) -> &str {
        (*self).display_name()
    }
}

fn linear(n: u8, r: u8, g: u8, b: u8) -> Rgba {
    Rgba::rgb(n.wrapping_mul(r), n.wrapping_mul(g), n.wrapping_mul(b))
}

fn sine_band(n: u8, frequency: f64) -> u8 {
    // Peaks at exactly 255.0, so the cast never saturates.
    (127.5 * (1.0 + (f64::from(n) * frequency).sin())) as u8
}

fn sine_bands(n: u8) -> Rgba {
    Rgba::rgb(sine_band(n, 0.1), sine_band(n, 0.15), sine_band(n, 0.2))
}

fn ramps(n: u8) -> Rgba {
    let n_wide = u32::from(n);
    let r = f64::from(n_wide * 10).sqrt() as u32;
    let g = (f64::from(n_wide + 1).ln() * 50.0) as u32;

    Rgba::rgb((r % 256) as u8, (g % 256) as u8, n.wrapping_mul(n))
}

fn tiers(n: u8) -> Rgba {
    if n < 50 {
        Rgba::rgb(n.wrapping_mul(3), n.wrapping_mul(2), 0)
    } else if n < 100 {
        Rgba::rgb(0, n.wrapping_mul(4), n.wrapping_mul(6))
    } else {
        Rgba::rgb(n.wrapping_mul(8), n.wrapping_mul(3), n)
    }
}

fn mixed(n: u8) -> Rgba {
    let r = n.wrapping_mul(n);
    let g = n.wrapping_mul(3).wrapping_add(50);
    let b = n.wrapping_mul(7).wrapping_sub(30);

    Rgba::rgb(r.wrapping_add(b), g.wrapping_add(r), b.wrapping_add(g))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape_time::MAX_ITER;

    fn rgb(gradient: Gradient, iterations: u32) -> (u8, u8, u8) {
        let colour = gradient.map(iterations);
        (colour.r, colour.g, colour.b)
    }

    #[test]
    fn test_every_gradient_repeats_every_256_counts() {
        for &gradient in Gradient::ALL {
            for n in [0, 1, 49, 50, 99, 100, 200, 255] {
                assert_eq!(gradient.map(n), gradient.map(n + 256), "{} at {}", gradient, n);
            }
        }
    }

    #[test]
    fn test_alpha_is_always_zero() {
        for &gradient in Gradient::ALL {
            for n in (0..=300).chain([MAX_ITER]) {
                assert_eq!(gradient.map(n).a, 0, "{} at {}", gradient, n);
            }
        }
    }

    #[test]
    fn test_linear_schemes() {
        assert_eq!(rgb(Gradient::Ember, 10), (130, 70, 30));
        assert_eq!(rgb(Gradient::Ember, 20), (4, 140, 60));
        assert_eq!(rgb(Gradient::Ice, 10), (30, 70, 130));
    }

    #[test]
    fn test_sine_bands_start_at_mid_grey() {
        assert_eq!(rgb(Gradient::SineBands, 0), (127, 127, 127));
    }

    #[test]
    fn test_ramps() {
        assert_eq!(rgb(Gradient::Ramps, 0), (0, 0, 0));
        // sqrt(100), 50·ln(11) ≈ 119.9, 10²
        assert_eq!(rgb(Gradient::Ramps, 10), (10, 119, 100));
        // 50·ln(256) ≈ 277.3 wraps to 21
        assert_eq!(rgb(Gradient::Ramps, 255).1, 21);
    }

    #[test]
    fn test_tiers_switch_at_50_and_100() {
        assert_eq!(rgb(Gradient::Tiers, 10), (30, 20, 0));
        assert_eq!(rgb(Gradient::Tiers, 60), (0, 240, 104));
        assert_eq!(rgb(Gradient::Tiers, 100), (32, 44, 100));
    }

    #[test]
    fn test_mixed_wraps_negative_blue_term() {
        // b' = -30 ≡ 226; r = 0 + 226, g = 50 + 0, b = 226 + 50 ≡ 20
        assert_eq!(rgb(Gradient::Mixed, 0), (226, 50, 20));
        assert_eq!(rgb(Gradient::Mixed, 10), (140, 180, 120));
    }

    #[test]
    fn test_inverted() {
        assert_eq!(rgb(Gradient::Inverted, 0), (255, 255, 255));
        assert_eq!(rgb(Gradient::Inverted, 10), (245, 205, 155));
    }

    #[test]
    fn test_display_name_comes_from_kind() {
        let map: &dyn ColourMap = &Gradient::Tiers;

        assert_eq!(map.display_name(), "Tiers");
    }
}
