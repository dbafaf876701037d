use serde::{Deserialize, Serialize};

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A coordinate pair. Stored as a two element `[lat, long]` array so the
/// persisted list keeps the layout the browser has always written.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

impl LatLong {
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }

    /// Finite, latitude within [-90, 90] and longitude within [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.long.is_finite()
            && self.lat.abs() <= MAX_LATITUDE
            && self.long.abs() <= MAX_LONGITUDE
    }
}

impl Default for LatLong {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<[f64; 2]> for LatLong {
    fn from([lat, long]: [f64; 2]) -> Self {
        Self { lat, long }
    }
}

impl From<LatLong> for [f64; 2] {
    fn from(pos: LatLong) -> Self {
        [pos.lat, pos.long]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    pub position: LatLong,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<String>>,
}

impl Place {
    pub fn reviews(&self) -> &[String] {
        self.reviews.as_deref().unwrap_or_default()
    }
}

fn seed(
    name: &str,
    position: (f64, f64),
    address: &str,
    phone: &str,
    website: &str,
    image_id: &str,
    reviews: &[&str],
) -> Place {
    Place {
        name: name.to_string(),
        position: LatLong::new(position.0, position.1),
        address: address.to_string(),
        phone: phone.to_string(),
        website: website.to_string(),
        image_url: format!("https://lh3.googleusercontent.com/d/{image_id}"),
        reviews: Some(reviews.iter().map(|r| r.to_string()).collect()),
    }
}

/// Built-in Providence, RI clinics shown when nothing has been saved yet.
pub fn seed_places() -> Vec<Place> {
    vec![
        seed(
            "Clinica Esperanza",
            (41.8107889, -71.4090636),
            "60 Valley Street #104, Providence, RI 02909",
            "(401) 347-9093",
            "https://clinica-esperanza-hope-clinic.business.site/",
            "1A5ZnUqnTW5Ht740cCuOKJpkCGXG5CW3J",
            &["Great clinic!", "Very helpful staff."],
        ),
        seed(
            "Hasbro Children's Hospital",
            (41.8430595, -71.3801977),
            "593 Eddy Street, Providence, Rhode Island",
            "(401) 444-4000",
            "https://www.lifespan.org/locations/hasbro-childrens-hospital",
            "1AC8CdGALEVBJRVf5xmUIUhnjUmVs730f",
            &["Excellent care for children."],
        ),
        seed(
            "Butler Hospital",
            (41.8189506, -71.4412852),
            "345 Blackstone Blvd, Providence, RI 02906",
            "(401) 455-6200",
            "https://www.butler.org/",
            "1j6uM6Se_jxGW8__7CaCRNrlDafrOpVbs",
            &["Good psychiatric services."],
        ),
        seed(
            "Providence Community Health Center Prairie Avenue",
            (41.8042408, -71.4148153),
            "355 Prairie Ave, Providence, RI 02905",
            "(401) 444-0570",
            "https://www.providencechc.org/locations/4-locations/pchc-prairie-avenue",
            "1ZNJwr-XSjlifEeSKI_mCwoK4TjCbxEfe",
            &["Friendly staff."],
        ),
        seed(
            "Providence Community Health Center Olneyville",
            (41.822519, -71.4512189),
            "100 Curtis St Providence, RI 02908",
            "(401) 444-0540",
            "https://www.providencechc.org/locations/pchc-olneyville",
            "1Suw-hvwztsjvz0ngK8J5WahzI2syG6ig",
            &["Convenient location."],
        ),
        seed(
            "Providence Community Health Center Crossroads",
            (41.8169108, -71.4167171),
            "160 Broad Street Providence, RI 02908",
            "(401) 861-2403",
            "https://www.providencechc.org/locations/pchc-crossroads",
            "1UIK6qbhESZy9xe6hNpMDed24qdvwoLUP",
            &["Great services."],
        ),
        seed(
            "Another Clinic",
            (41.8357388, -71.4229214),
            "123 Example St, Providence, RI 02909",
            "(401) 123-4567",
            "http://example2.com",
            "1_trvcS18dK3uOlr5_juPodZuiAX9vjtG",
            &["Helpful staff."],
        ),
    ]
}
