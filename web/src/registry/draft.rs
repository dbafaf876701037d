use std::fmt;

use shared_types::{LatLong, Place, MAX_LATITUDE, MAX_LONGITUDE};
use thiserror::Error;

pub const DEFAULT_NAME: &str = "Unnamed Place";
pub const DEFAULT_ADDRESS: &str = "No Address Provided";
pub const DEFAULT_PHONE: &str = "No Phone Number Provided";
pub const DEFAULT_WEBSITE: &str = "No Website Provided";
pub const DEFAULT_IMAGE_URL: &str = "https://via.placeholder.com/150";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Latitude,
    Longitude,
    Address,
    Phone,
    Website,
    ImageUrl,
}

impl FormField {
    /// Form order.
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Latitude,
        FormField::Longitude,
        FormField::Address,
        FormField::Phone,
        FormField::Website,
        FormField::ImageUrl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Latitude => "Latitude",
            FormField::Longitude => "Longitude",
            FormField::Address => "Address",
            FormField::Phone => "Phone",
            FormField::Website => "Website",
            FormField::ImageUrl => "Image URL",
        }
    }

    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Latitude => "latitude",
            FormField::Longitude => "longitude",
            FormField::Address => "address",
            FormField::Phone => "phone",
            FormField::Website => "website",
            FormField::ImageUrl => "imageUrl",
        }
    }

    /// HTML input type.
    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Latitude | FormField::Longitude => "number",
            FormField::Website | FormField::ImageUrl => "url",
            _ => "text",
        }
    }

    /// Inclusive bounds for the coordinate fields.
    pub fn bounds(self) -> Option<(f64, f64)> {
        match self {
            FormField::Latitude => Some((-MAX_LATITUDE, MAX_LATITUDE)),
            FormField::Longitude => Some((-MAX_LONGITUDE, MAX_LONGITUDE)),
            _ => None,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(FormField),
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: FormField, value: String },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: FormField,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("the place being edited no longer exists")]
    StaleEditTarget,
}

impl FormError {
    /// The input to flag next to the message, if any.
    pub fn field(&self) -> Option<FormField> {
        match self {
            FormError::Missing(field)
            | FormError::NotANumber { field, .. }
            | FormError::OutOfRange { field, .. } => Some(*field),
            FormError::StaleEditTarget => None,
        }
    }
}

/// Text buffer behind the add/edit form. Coordinates stay as text until
/// submit so a bad value can be reported instead of stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDraft {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub image_url: String,
}

impl Default for PlaceDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            latitude: "0".to_string(),
            longitude: "0".to_string(),
            address: String::new(),
            phone: String::new(),
            website: String::new(),
            image_url: String::new(),
        }
    }
}

impl PlaceDraft {
    /// Everything but the reviews, which the form never edits.
    pub fn from_place(place: &Place) -> Self {
        Self {
            name: place.name.clone(),
            latitude: place.position.lat.to_string(),
            longitude: place.position.long.to_string(),
            address: place.address.clone(),
            phone: place.phone.clone(),
            website: place.website.clone(),
            image_url: place.image_url.clone(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Latitude => &self.latitude,
            FormField::Longitude => &self.longitude,
            FormField::Address => &self.address,
            FormField::Phone => &self.phone,
            FormField::Website => &self.website,
            FormField::ImageUrl => &self.image_url,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Latitude => &mut self.latitude,
            FormField::Longitude => &mut self.longitude,
            FormField::Address => &mut self.address,
            FormField::Phone => &mut self.phone,
            FormField::Website => &mut self.website,
            FormField::ImageUrl => &mut self.image_url,
        };
        *slot = value;
    }

    /// A new record; empty text fields get their placeholder.
    pub fn build_new(&self) -> Result<Place, FormError> {
        let lat = parse_coordinate(FormField::Latitude, &self.latitude)?
            .ok_or(FormError::Missing(FormField::Latitude))?;
        let long = parse_coordinate(FormField::Longitude, &self.longitude)?
            .ok_or(FormError::Missing(FormField::Longitude))?;

        Ok(Place {
            name: or_default(&self.name, DEFAULT_NAME),
            position: LatLong::new(lat, long),
            address: or_default(&self.address, DEFAULT_ADDRESS),
            phone: or_default(&self.phone, DEFAULT_PHONE),
            website: or_default(&self.website, DEFAULT_WEBSITE),
            image_url: or_default(&self.image_url, DEFAULT_IMAGE_URL),
            reviews: Some(Vec::new()),
        })
    }

    /// `original` with every non-empty draft field written over it.
    pub fn apply_to(&self, original: &Place) -> Result<Place, FormError> {
        let lat = parse_coordinate(FormField::Latitude, &self.latitude)?;
        let long = parse_coordinate(FormField::Longitude, &self.longitude)?;

        Ok(Place {
            name: or_default(&self.name, &original.name),
            position: LatLong::new(
                lat.unwrap_or(original.position.lat),
                long.unwrap_or(original.position.long),
            ),
            address: or_default(&self.address, &original.address),
            phone: or_default(&self.phone, &original.phone),
            website: or_default(&self.website, &original.website),
            image_url: or_default(&self.image_url, &original.image_url),
            reviews: original.reviews.clone(),
        })
    }
}

fn or_default(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// `Ok(None)` for blank input.
fn parse_coordinate(field: FormField, text: &str) -> Result<Option<f64>, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let value = text
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FormError::NotANumber {
            field,
            value: text.to_string(),
        })?;

    if let Some((min, max)) = field.bounds() {
        if !(min..=max).contains(&value) {
            return Err(FormError::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
    }

    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_at(lat: &str, long: &str) -> PlaceDraft {
        PlaceDraft {
            latitude: lat.to_string(),
            longitude: long.to_string(),
            ..PlaceDraft::default()
        }
    }

    fn existing() -> Place {
        Place {
            name: "A".into(),
            position: LatLong::new(41.0, -71.0),
            address: "Addr1".into(),
            phone: "111".into(),
            website: "https://a.example".into(),
            image_url: "https://a.example/a.png".into(),
            reviews: Some(vec!["Nice".into()]),
        }
    }

    #[test]
    fn empty_fields_take_placeholders() {
        let place = draft_at("41.5", "-71.25").build_new().unwrap();
        assert_eq!(place.name, DEFAULT_NAME);
        assert_eq!(place.address, DEFAULT_ADDRESS);
        assert_eq!(place.phone, DEFAULT_PHONE);
        assert_eq!(place.website, DEFAULT_WEBSITE);
        assert_eq!(place.image_url, DEFAULT_IMAGE_URL);
        assert_eq!(place.position, LatLong::new(41.5, -71.25));
        assert_eq!(place.reviews, Some(vec![]));
    }

    #[test]
    fn default_draft_builds_at_origin() {
        let place = PlaceDraft::default().build_new().unwrap();
        assert_eq!(place.position, LatLong::new(0.0, 0.0));
    }

    #[test]
    fn non_numeric_latitude_is_rejected() {
        let err = draft_at("north", "0").build_new().unwrap_err();
        assert_eq!(
            err,
            FormError::NotANumber {
                field: FormField::Latitude,
                value: "north".into()
            }
        );
        assert_eq!(err.field(), Some(FormField::Latitude));
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        assert!(matches!(
            draft_at("NaN", "0").build_new(),
            Err(FormError::NotANumber { .. })
        ));
        assert!(matches!(
            draft_at("0", "inf").build_new(),
            Err(FormError::NotANumber {
                field: FormField::Longitude,
                ..
            })
        ));
    }

    #[test]
    fn out_of_range_longitude_is_rejected() {
        let err = draft_at("0", "180.5").build_new().unwrap_err();
        assert_eq!(err.field(), Some(FormField::Longitude));
        assert!(err.to_string().contains("between -180 and 180"));
        assert!(draft_at("-90", "180").build_new().is_ok());
    }

    #[test]
    fn blank_coordinate_is_required_when_adding() {
        assert_eq!(
            draft_at(" ", "1").build_new(),
            Err(FormError::Missing(FormField::Latitude))
        );
    }

    #[test]
    fn edit_keeps_originals_for_empty_fields() {
        let draft = PlaceDraft {
            name: String::new(),
            address: "Addr2".into(),
            latitude: String::new(),
            longitude: String::new(),
            ..PlaceDraft::default()
        };

        let edited = draft.apply_to(&existing()).unwrap();
        assert_eq!(edited.name, "A");
        assert_eq!(edited.address, "Addr2");
        assert_eq!(edited.phone, "111");
        assert_eq!(edited.position, LatLong::new(41.0, -71.0));
        assert_eq!(edited.reviews, Some(vec!["Nice".to_string()]));
    }

    #[test]
    fn edit_replaces_position() {
        let mut draft = PlaceDraft::from_place(&existing());
        draft.set(FormField::Longitude, "-70.5".into());

        let edited = draft.apply_to(&existing()).unwrap();
        assert_eq!(edited.position, LatLong::new(41.0, -70.5));
    }

    #[test]
    fn from_place_round_trips_coordinates() {
        let place = existing();
        let draft = PlaceDraft::from_place(&place);
        assert_eq!(draft.get(FormField::Latitude), "41");
        assert_eq!(draft.apply_to(&place).unwrap(), place);
    }
}
