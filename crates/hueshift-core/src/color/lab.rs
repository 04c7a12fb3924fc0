//! LAB (CIE L*a*b*) color space conversions and utilities

/// LAB color representation (CIE L*a*b*)
/// - L: 0.0-100.0 (lightness)
/// - a: approximately -128 to +128 (green-red axis)
/// - b: approximately -128 to +128 (blue-yellow axis)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// D65 standard illuminant reference white point
pub(crate) const D65_X: f32 = 0.95047;
pub(crate) const D65_Y: f32 = 1.00000;
pub(crate) const D65_Z: f32 = 1.08883;

/// sRGB to XYZ matrix (D65)
pub(crate) const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.119_192, 0.9503041],
];

/// XYZ to sRGB matrix (D65)
pub(crate) const XYZ_TO_SRGB: [[f32; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.969_266, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// Offset applied to a and b in the 8-bit LAB encoding
pub(crate) const AB_OFFSET: f32 = 128.0;

/// L* to 8-bit LAB lightness scale
pub(crate) const L_SCALE: f32 = 255.0 / 100.0;

#[inline]
fn mul3(m: &[[f32; 3]; 3], v: (f32, f32, f32)) -> (f32, f32, f32) {
    (
        m[0][0] * v.0 + m[0][1] * v.1 + m[0][2] * v.2,
        m[1][0] * v.0 + m[1][1] * v.1 + m[1][2] * v.2,
        m[2][0] * v.0 + m[2][1] * v.1 + m[2][2] * v.2,
    )
}

/// LAB f(t) function
#[inline]
fn lab_f(t: f32) -> f32 {
    const DELTA: f32 = 6.0 / 29.0;
    const DELTA_CUBED: f32 = DELTA * DELTA * DELTA; // ~0.008856

    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// LAB f^-1(t) inverse function
#[inline]
fn lab_f_inv(t: f32) -> f32 {
    const DELTA: f32 = 6.0 / 29.0;

    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// sRGB transfer function, encoded 0.0-1.0 to linear light
#[inline]
pub fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse sRGB transfer function, linear light to encoded 0.0-1.0
#[inline]
pub fn linear_to_srgb(v: f32) -> f32 {
    if v <= 0.0031308 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert linear sRGB to CIE LAB (D65 illuminant)
///
/// Input: Linear RGB values in range 0.0-1.0
/// Output: LAB where L is 0-100, a and b are approximately -128 to +128
#[inline]
pub fn rgb_to_lab(r: f32, g: f32, b: f32) -> Lab {
    let (x, y, z) = mul3(&SRGB_TO_XYZ, (r.max(0.0), g.max(0.0), b.max(0.0)));

    let fx = lab_f(x / D65_X);
    let fy = lab_f(y / D65_Y);
    let fz = lab_f(z / D65_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert CIE LAB to linear sRGB (D65 illuminant)
///
/// Output may fall outside 0.0-1.0 for out-of-gamut colors.
#[inline]
pub fn lab_to_rgb(lab: Lab) -> (f32, f32, f32) {
    let Lab { l, a, b } = lab;

    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let xyz = (
        D65_X * lab_f_inv(fx),
        D65_Y * lab_f_inv(fy),
        D65_Z * lab_f_inv(fz),
    );
    mul3(&XYZ_TO_SRGB, xyz)
}

/// Map CIE LAB to the 8-bit LAB encoding (L*255/100, a+128, b+128)
#[inline]
pub fn encode_lab8(lab: Lab) -> [f32; 3] {
    [lab.l * L_SCALE, lab.a + AB_OFFSET, lab.b + AB_OFFSET]
}

/// Inverse of [`encode_lab8`]
#[inline]
pub fn decode_lab8(v: [f32; 3]) -> Lab {
    Lab {
        l: v[0] / L_SCALE,
        a: v[1] - AB_OFFSET,
        b: v[2] - AB_OFFSET,
    }
}

/// Convert one 8-bit sRGB pixel to 8-bit-encoded LAB samples
#[inline]
pub fn srgb8_to_lab(rgb: [u8; 3]) -> [f32; 3] {
    let lin = |v: u8| srgb_to_linear(v as f32 / 255.0);
    encode_lab8(rgb_to_lab(lin(rgb[0]), lin(rgb[1]), lin(rgb[2])))
}

/// Convert 8-bit-encoded LAB samples back to an 8-bit sRGB pixel
///
/// Out-of-gamut results are clamped to 0-255 and rounded to nearest.
#[inline]
pub fn lab_to_srgb8(v: [f32; 3]) -> [u8; 3] {
    let (r, g, b) = lab_to_rgb(decode_lab8(v));
    let quantize = |c: f32| {
        let encoded = linear_to_srgb(c.clamp(0.0, 1.0));
        (encoded * 255.0).round().clamp(0.0, 255.0) as u8
    };
    [quantize(r), quantize(g), quantize(b)]
}
