use serde::Deserialize;

// response
//  └── results[]
//       └── geometry
//            └── location
//                 ├── lat
//                 └── lng

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeHit>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeHit {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
