//! Parameters of the reference grade model.
//!
//! Exported from the trained `StandardScaler` + `LogisticRegression`
//! pipeline. Row order of [`COEF`] and [`INTERCEPT`] follows [`CLASSES`].

pub const SCALER_MEAN: [f64; 3] = [9.883191153685994, 80.18119506722138, 5.500453551210817];

pub const SCALER_SCALE: [f64; 3] = [5.752314893222216, 11.571203423371777, 2.580834764341034];

pub const COEF: [[f64; 3]; 5] = [
    [10.295743872225227, 3.712924665223109, 3.186329644632605],
    [4.657751685774865, 1.7778408988604228, 1.50793648322333],
    [-0.7428029301871368, -0.04259141051133599, -0.13478669098875173],
    [-5.977340454601074, -1.813516573309296, -1.7106684916485877],
    [-8.233352173211955, -3.6346575802628993, -2.848810945218603],
];

pub const INTERCEPT: [f64; 5] = [
    5.648461965455058,
    7.025443835324328,
    3.6505494073918396,
    -4.08065977737378,
    -12.243795430797299,
];

pub const CLASSES: [&str; 5] = ["A", "B", "C", "D", "F"];
