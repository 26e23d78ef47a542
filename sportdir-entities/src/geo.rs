/// Map coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let pos = Self { lat, lng };
        pos.is_valid().then_some(pos)
    }

    pub const fn lat(&self) -> f64 {
        self.lat
    }

    pub const fn lng(&self) -> f64 {
        self.lng
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}
