// ============================================================================
// WIRE - Decodificación tolerante de las respuestas del backend
// ============================================================================
// El backend puede mandar `null` en cualquier campo y algún elemento roto en
// las listas. Un campo nulo toma su valor por defecto y un elemento que no
// decodifica se descarta sin perder el resto de la lista.
// ============================================================================

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// `null` → `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

/// Lista opcional que descarta los elementos que no decodifican
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let Some(items) = Option::<Vec<Lenient<T>>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let total = items.len();
    let valid: Vec<T> = items
        .into_iter()
        .filter_map(|item| match item {
            Lenient::Valid(value) => Some(value),
            Lenient::Invalid(_) => None,
        })
        .collect();

    if valid.len() < total {
        log::warn!("⚠️ [WIRE] {} elemento(s) descartados al decodificar", total - valid.len());
    }
    Ok(Some(valid))
}
