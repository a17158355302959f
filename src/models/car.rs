use serde::{Deserialize, Serialize};
use crate::models::wire::{lenient_list, null_as_default};

/// Coche del catálogo, tal como lo devuelve el backend (solo lectura)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct Car {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub fuel: String,
    #[serde(rename = "trans", deserialize_with = "null_as_default")]
    pub transmission: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mileage: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
}

impl Car {
    /// "Brand Model" para títulos
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// Respuesta de GET /api/cars/allcars
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct CarsResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub cars: Option<Vec<Car>>,
}

impl CarsResponse {
    /// Lista de coches (vacía si el backend no envía "cars")
    pub fn into_cars(self) -> Vec<Car> {
        self.cars.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_field_names() {
        let json = r#"{
            "_id": "c1", "brand": "Tata", "model": "Nexon", "year": 2022,
            "color": "Red", "price": 950000, "fuel": "Petrol",
            "trans": "Manual", "mileage": 12000, "image": "https://img/c1.jpg"
        }"#;
        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.id, "c1");
        assert_eq!(car.transmission, "Manual");
        assert_eq!(car.display_name(), "Tata Nexon");
        assert_eq!(format!("{}", car.price), "950000");
    }

    #[test]
    fn missing_cars_array_is_empty() {
        let response: CarsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_cars().is_empty());

        let response: CarsResponse = serde_json::from_str(r#"{"cars": null}"#).unwrap();
        assert!(response.into_cars().is_empty());
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let json = r#"{
            "_id": "c2", "brand": "Maruti", "model": null, "year": null,
            "color": null, "price": null, "fuel": null,
            "trans": null, "mileage": null, "image": null
        }"#;
        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.id, "c2");
        assert_eq!(car.brand, "Maruti");
        assert_eq!(car.image, "");
        assert_eq!(car.transmission, "");
        assert_eq!(car.year, 0);
        assert_eq!(car.price, 0.0);
    }

    #[test]
    fn broken_car_does_not_hide_the_rest_of_the_catalog() {
        let json = r#"{"cars": [
            {"_id": "c1", "brand": "Tata", "model": "Nexon", "image": null},
            42,
            {"_id": "c3", "brand": "Kia", "year": "not a year"},
            {"_id": "c4", "brand": "Hyundai", "model": "Creta"}
        ]}"#;
        let cars = serde_json::from_str::<CarsResponse>(json).unwrap().into_cars();
        let ids: Vec<&str> = cars.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c4"]);
        assert_eq!(cars[0].image, "");
    }
}
