//! Golden-image checks for both models and the automatic dispatch.
//!
//! The reference pixels were produced by an independent single-precision
//! evaluation of the same calibration tables with half-up rounding. A
//! difference of one code value per channel is tolerated.

use cvdsim_core::compare::{DEFAULT_TOLERANCE, compare_rgba};
use cvdsim_core::{
    Algorithm, Deficiency, Pixel, simulate_cvd, simulate_cvd_brettel1997, simulate_cvd_vienot1999,
};

const WIDTH: usize = 6;
const HEIGHT: usize = 4;
const PIXELS: usize = WIDTH * HEIGHT;

const INPUT: [Pixel; PIXELS] = [
    [0, 0, 0, 0], [255, 255, 255, 255], [255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255], [128, 128, 128, 85],
    [255, 255, 0, 255], [0, 255, 255, 255], [255, 0, 255, 255], [200, 30, 60, 255], [30, 200, 60, 170], [60, 30, 200, 255],
    [12, 9, 4, 255], [250, 128, 5, 255], [90, 180, 240, 255], [17, 34, 51, 255], [230, 230, 25, 255], [3, 100, 3, 255],
    [150, 75, 0, 255], [255, 192, 203, 255], [64, 224, 208, 68], [128, 0, 128, 255], [10, 250, 130, 255], [240, 240, 240, 255],
];

const BRETTEL1997_PROTAN_1_0: [Pixel; PIXELS] = [
    [0, 0, 0, 0], [255, 255, 255, 255], [106, 91, 14, 255], [255, 238, 0, 255], [0, 55, 255, 255], [128, 128, 128, 85],
    [255, 250, 0, 255], [238, 243, 255, 255], [0, 106, 255, 255], [82, 77, 62, 255], [215, 187, 58, 170], [0, 55, 200, 255],
    [11, 9, 4, 255], [169, 145, 14, 255], [144, 176, 240, 255], [24, 33, 51, 255], [255, 226, 23, 255], [109, 93, 0, 255],
    [101, 85, 3, 255], [199, 200, 203, 255], [216, 213, 208, 68], [0, 49, 128, 255], [255, 234, 129, 255], [240, 240, 240, 255],
];

const BRETTEL1997_PROTAN_0_55: [Pixel; PIXELS] = [
    [0, 0, 0, 0], [255, 255, 255, 255], [192, 68, 8, 255], [212, 246, 0, 255], [0, 40, 255, 255], [128, 128, 128, 85],
    [255, 252, 0, 255], [183, 248, 255, 255], [161, 79, 255, 255], [150, 61, 61, 255], [166, 193, 59, 170], [0, 45, 200, 255],
    [12, 9, 4, 255], [211, 138, 10, 255], [123, 178, 240, 255], [21, 34, 51, 255], [248, 228, 24, 255], [82, 96, 2, 255],
    [126, 81, 2, 255], [227, 197, 203, 255], [170, 218, 208, 68], [79, 35, 128, 255], [202, 242, 129, 255], [240, 240, 240, 255],
];

const VIENOT1999_PROTAN_1_0: [Pixel; PIXELS] = [
    [0, 0, 0, 0], [255, 255, 255, 255], [93, 93, 14, 255], [242, 242, 0, 255], [0, 0, 255, 255], [128, 128, 128, 85],
    [255, 255, 0, 255], [242, 242, 254, 255], [93, 93, 255, 255], [77, 77, 62, 255], [190, 190, 58, 170], [35, 35, 200, 255],
    [9, 9, 4, 255], [148, 148, 15, 255], [173, 173, 240, 255], [33, 33, 51, 255], [230, 230, 25, 255], [95, 95, 1, 255],
    [87, 87, 3, 255], [200, 200, 203, 255], [214, 214, 208, 68], [42, 42, 128, 255], [238, 238, 129, 255], [240, 240, 240, 255],
];

const VIENOT1999_PROTAN_0_55: [Pixel; PIXELS] = [
    [0, 0, 0, 0], [255, 255, 255, 255], [189, 69, 8, 255], [186, 248, 0, 255], [0, 0, 255, 255], [128, 128, 128, 85],
    [255, 255, 0, 255], [186, 248, 255, 255], [189, 69, 255, 255], [149, 61, 61, 255], [147, 195, 59, 170], [48, 33, 200, 255],
    [11, 9, 4, 255], [202, 139, 11, 255], [143, 176, 240, 255], [27, 33, 51, 255], [230, 230, 25, 255], [71, 97, 2, 255],
    [121, 82, 2, 255], [227, 197, 203, 255], [168, 218, 208, 68], [93, 30, 128, 255], [182, 243, 129, 255], [240, 240, 240, 255],
];

const BRETTEL1997_DEUTAN_1_0: [Pixel; PIXELS] = [
    [0, 0, 0, 0], [255, 255, 255, 255], [164, 139, 0, 255], [242, 209, 46, 255], [0, 86, 254, 255], [128, 128, 128, 85],
    [255, 243, 22, 255], [209, 223, 255, 255], [102, 161, 252, 255], [127, 112, 52, 255], [188, 165, 70, 170], [0, 77, 199, 255],
    [11, 9, 4, 255], [195, 167, 0, 255], [133, 170, 240, 255], [23, 33, 51, 255], [254, 219, 34, 255], [94, 81, 14, 255],
    [116, 99, 0, 255], [216, 212, 202, 255], [191, 196, 210, 68], [47, 78, 126, 255], [230, 208, 136, 255], [240, 240, 240, 255],
];

const BRETTEL1997_DEUTAN_0_55: [Pixel; PIXELS] = [
    [0, 0, 0, 0], [255, 255, 255, 255], [211, 105, 0, 255], [185, 231, 33, 255], [0, 64, 255, 255], [128, 128, 128, 85],
    [255, 248, 14, 255], [160, 238, 255, 255], [191, 122, 253, 255], [165, 87, 56, 255], [145, 182, 65, 170], [0, 61, 200, 255],
    [12, 9, 4, 255], [222, 151, 0, 255], [116, 175, 240, 255], [20, 33, 51, 255], [244, 224, 30, 255], [71, 90, 9, 255],
    [133, 89, 0, 255], [234, 203, 202, 255], [151, 209, 209, 68], [94, 58, 127, 255], [176, 228, 134, 255], [240, 240, 240, 255],
];

const VIENOT1999_DEUTAN_1_0: [Pixel; PIXELS] = [
    [0, 0, 0, 0], [255, 255, 255, 255], [147, 147, 0, 255], [219, 219, 41, 255], [0, 0, 255, 255], [128, 128, 128, 85],
    [255, 255, 0, 255], [219, 219, 255, 255], [147, 147, 253, 255], [117, 117, 51, 255], [172, 172, 68, 170], [41, 41, 200, 255],
    [10, 10, 4, 255], [175, 175, 0, 255], [160, 160, 241, 255], [30, 30, 51, 255], [230, 230, 25, 255], [85, 85, 12, 255],
    [104, 104, 0, 255], [213, 213, 201, 255], [195, 195, 210, 68], [71, 71, 127, 255], [215, 215, 135, 255], [240, 240, 240, 255],
];

const VIENOT1999_DEUTAN_0_55: [Pixel; PIXELS] = [
    [0, 0, 0, 0], [255, 255, 255, 255], [205, 111, 0, 255], [168, 236, 29, 255], [0, 0, 255, 255], [128, 128, 128, 85],
    [255, 255, 0, 255], [168, 236, 255, 255], [205, 111, 254, 255], [161, 90, 55, 255], [133, 185, 64, 170], [51, 37, 200, 255],
    [11, 9, 4, 255], [213, 156, 0, 255], [135, 170, 241, 255], [25, 32, 51, 255], [230, 230, 25, 255], [63, 92, 8, 255],
    [127, 92, 0, 255], [233, 204, 202, 255], [154, 209, 209, 68], [102, 52, 127, 255], [165, 232, 133, 255], [240, 240, 240, 255],
];

const BRETTEL1997_TRITAN_1_0: [Pixel; PIXELS] = [
    [0, 0, 0, 0], [255, 255, 255, 255], [255, 0, 78, 255], [124, 234, 255, 255], [0, 96, 135, 255], [128, 128, 128, 85],
    [255, 239, 242, 255], [73, 248, 255, 255], [238, 99, 120, 255], [200, 27, 69, 255], [98, 185, 213, 170], [0, 80, 103, 255],
    [13, 8, 9, 255], [255, 117, 137, 255], [75, 185, 217, 255], [13, 36, 43, 255], [245, 216, 218, 255], [45, 91, 106, 255],
    [153, 68, 80, 255], [254, 193, 199, 255], [94, 217, 253, 68], [119, 46, 57, 255], [113, 233, 255, 255], [240, 240, 240, 255],
];

const BRETTEL1997_TRITAN_0_55: [Pixel; PIXELS] = [
    [0, 0, 0, 0], [255, 255, 255, 255], [255, 0, 58, 255], [93, 244, 207, 255], [0, 72, 201, 255], [128, 128, 128, 85],
    [255, 246, 186, 255], [54, 251, 255, 255], [246, 74, 196, 255], [200, 28, 65, 255], [76, 192, 167, 170], [9, 63, 157, 255],
    [12, 9, 7, 255], [253, 122, 104, 255], [82, 183, 228, 255], [15, 35, 47, 255], [238, 222, 168, 255], [33, 95, 80, 255],
    [152, 71, 59, 255], [255, 192, 201, 255], [82, 220, 234, 68], [123, 32, 97, 255], [85, 241, 222, 255], [240, 240, 240, 255],
];

const VIENOT1999_TRITAN_1_0: [Pixel; PIXELS] = [
    [0, 0, 0, 0], [255, 255, 255, 255], [255, 0, 0, 255], [109, 239, 239, 255], [0, 102, 102, 255], [128, 128, 128, 85],
    [255, 239, 239, 255], [0, 255, 255, 255], [237, 102, 102, 255], [199, 36, 36, 255], [86, 189, 189, 170], [0, 84, 84, 255],
    [13, 8, 8, 255], [254, 120, 120, 255], [56, 189, 189, 255], [10, 37, 37, 255], [245, 216, 216, 255], [39, 93, 93, 255],
    [152, 70, 70, 255], [254, 194, 194, 255], [74, 222, 222, 68], [119, 47, 47, 255], [95, 238, 238, 255], [240, 240, 240, 255],
];

const VIENOT1999_TRITAN_0_55: [Pixel; PIXELS] = [
    [0, 0, 0, 0], [255, 255, 255, 255], [255, 0, 0, 255], [82, 247, 184, 255], [0, 76, 191, 255], [128, 128, 128, 85],
    [255, 247, 184, 255], [0, 255, 255, 255], [245, 76, 191, 255], [200, 33, 48, 255], [68, 194, 149, 170], [0, 66, 151, 255],
    [12, 9, 6, 255], [252, 124, 91, 255], [73, 185, 214, 255], [13, 36, 44, 255], [238, 223, 166, 255], [28, 96, 70, 255],
    [151, 72, 51, 255], [254, 193, 198, 255], [70, 223, 216, 68], [123, 34, 94, 255], [72, 244, 199, 255], [240, 240, 240, 255],
];

fn reference(algorithm: Algorithm, deficiency: Deficiency, severity: f32) -> &'static [Pixel; PIXELS] {
    let full = severity == 1.0;
    match (algorithm.resolve(deficiency), deficiency, full) {
        (Algorithm::Brettel1997, Deficiency::Protan, true) => &BRETTEL1997_PROTAN_1_0,
        (Algorithm::Brettel1997, Deficiency::Protan, false) => &BRETTEL1997_PROTAN_0_55,
        (Algorithm::Brettel1997, Deficiency::Deutan, true) => &BRETTEL1997_DEUTAN_1_0,
        (Algorithm::Brettel1997, Deficiency::Deutan, false) => &BRETTEL1997_DEUTAN_0_55,
        (Algorithm::Brettel1997, Deficiency::Tritan, true) => &BRETTEL1997_TRITAN_1_0,
        (Algorithm::Brettel1997, Deficiency::Tritan, false) => &BRETTEL1997_TRITAN_0_55,
        (Algorithm::Vienot1999, Deficiency::Protan, true) => &VIENOT1999_PROTAN_1_0,
        (Algorithm::Vienot1999, Deficiency::Protan, false) => &VIENOT1999_PROTAN_0_55,
        (Algorithm::Vienot1999, Deficiency::Deutan, true) => &VIENOT1999_DEUTAN_1_0,
        (Algorithm::Vienot1999, Deficiency::Deutan, false) => &VIENOT1999_DEUTAN_0_55,
        (Algorithm::Vienot1999, Deficiency::Tritan, true) => &VIENOT1999_TRITAN_1_0,
        (Algorithm::Vienot1999, Deficiency::Tritan, false) => &VIENOT1999_TRITAN_0_55,
        (Algorithm::Auto, ..) => unreachable!("resolved above"),
    }
}

fn input_bytes() -> Vec<u8> {
    INPUT.iter().flatten().copied().collect()
}

fn assert_matches_reference(name: &str, actual: &[u8], expected: &[Pixel; PIXELS]) {
    let expected: Vec<u8> = expected.iter().flatten().copied().collect();
    let cmp = compare_rgba(&expected, actual, WIDTH, DEFAULT_TOLERANCE).expect("same geometry");
    if let Some(m) = cmp.first_mismatch {
        panic!(
            "FAIL ({name}): pixel differs at ({},{})[{}] diff={} expected={} actual={}",
            m.x,
            m.y,
            m.channel,
            m.diff(),
            m.expected,
            m.actual
        );
    }
}

type SimulateFn = fn(Deficiency, f32, &mut [u8], usize, usize, usize) -> cvdsim_core::SimulationResult<()>;

fn run_suite(algorithm: Algorithm, simulate: SimulateFn) {
    for &deficiency in Deficiency::all() {
        for severity in [1.0, 0.55] {
            let mut img = input_bytes();
            simulate(deficiency, severity, &mut img, WIDTH, HEIGHT, 0).expect("valid geometry");
            let name = format!("{algorithm}_{deficiency}_{severity}");
            assert_matches_reference(&name, &img, reference(algorithm, deficiency, severity));
        }
    }
}

#[test]
fn test_vienot1999_matches_reference_images() {
    run_suite(Algorithm::Vienot1999, simulate_cvd_vienot1999);
}

#[test]
fn test_brettel1997_matches_reference_images() {
    run_suite(Algorithm::Brettel1997, simulate_cvd_brettel1997);
}

#[test]
fn test_automatic_dispatch_matches_reference_images() {
    run_suite(Algorithm::Auto, simulate_cvd);
}

#[test]
fn test_padded_stride_matches_reference_and_keeps_padding() {
    const PAD: usize = 8;
    let stride = WIDTH * 4 + PAD;
    let src = input_bytes();
    let mut padded = vec![0xAB; stride * HEIGHT];
    for y in 0..HEIGHT {
        padded[y * stride..y * stride + WIDTH * 4]
            .copy_from_slice(&src[y * WIDTH * 4..(y + 1) * WIDTH * 4]);
    }

    simulate_cvd(Deficiency::Tritan, 0.55, &mut padded, WIDTH, HEIGHT, stride)
        .expect("valid geometry");

    let mut packed = Vec::with_capacity(PIXELS * 4);
    for y in 0..HEIGHT {
        let row = &padded[y * stride..(y + 1) * stride];
        packed.extend_from_slice(&row[..WIDTH * 4]);
        assert!(
            row[WIDTH * 4..].iter().all(|&b| b == 0xAB),
            "padding of row {y} was modified"
        );
    }
    assert_matches_reference(
        "tritan_0.55_padded",
        &packed,
        reference(Algorithm::Auto, Deficiency::Tritan, 0.55),
    );
}
