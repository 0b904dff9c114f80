//! Function registry exposed to the scripting host
//!
//! The host looks toolbox functions up by name. Every function is registered
//! explicitly in [`FunctionRegistry::new`] together with its documentation, so
//! the host can list what is available and bind positional arguments.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, instrument};

use crate::error::ToolboxError;
use crate::formulas::{self, CompassRose, ToolboxVariant};
use crate::models::Value;
use crate::Result;

/// Kind of value a parameter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// Floating point; integers are widened
    Number,
    Integer,
    Bool,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Number => write!(f, "number"),
            ParamKind::Integer => write!(f, "integer"),
            ParamKind::Bool => write!(f, "bool"),
        }
    }
}

/// Named positional parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamDoc {
    pub name: &'static str,
    pub kind: ParamKind,
}

/// Documentation of a registered function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionDoc {
    pub name: &'static str,
    pub text: &'static str,
    pub returns: &'static str,
    pub params: &'static [ParamDoc],
}

impl ActionDoc {
    /// Call signature, e.g. `beaufort_index(wind_speed: number)`
    #[must_use]
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.kind))
            .collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

/// Positional arguments of one call, bound against the callee's parameters
pub struct Args<'a> {
    doc: &'a ActionDoc,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn new(doc: &'a ActionDoc, values: &'a [Value]) -> Result<Self> {
        if values.len() != doc.params.len() {
            return Err(ToolboxError::arity(doc.name, doc.params.len(), values.len()));
        }
        Ok(Self { doc, values })
    }

    fn mismatch(&self, index: usize, kind: ParamKind) -> ToolboxError {
        let parameter = self.doc.params.get(index).map_or("?", |p| p.name);
        let found = self.values.get(index).map_or("nothing", Value::type_name);
        ToolboxError::argument_type(self.doc.name, parameter, kind.to_string(), found)
    }

    pub fn number(&self, index: usize) -> Result<f64> {
        self.values
            .get(index)
            .and_then(Value::as_f64)
            .ok_or_else(|| self.mismatch(index, ParamKind::Number))
    }

    pub fn integer(&self, index: usize) -> Result<i64> {
        self.values
            .get(index)
            .and_then(Value::as_i64)
            .ok_or_else(|| self.mismatch(index, ParamKind::Integer))
    }

    pub fn flag(&self, index: usize) -> Result<bool> {
        self.values
            .get(index)
            .and_then(Value::as_bool)
            .ok_or_else(|| self.mismatch(index, ParamKind::Bool))
    }
}

type Handler = fn(ToolboxVariant, &Args<'_>) -> Result<Value>;

/// A registered function: its documentation and the code behind it
#[derive(Clone, Copy)]
pub struct ToolboxFunction {
    pub doc: ActionDoc,
    handler: Handler,
}

impl fmt::Debug for ToolboxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolboxFunction")
            .field("doc", &self.doc)
            .finish_non_exhaustive()
    }
}

const fn number(name: &'static str) -> ParamDoc {
    ParamDoc {
        name,
        kind: ParamKind::Number,
    }
}

fn great_circle_distance(variant: ToolboxVariant, args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(formulas::great_circle_distance(
        args.number(0)?,
        args.number(1)?,
        args.number(2)?,
        args.number(3)?,
        variant.earth_diameter_m(),
    )))
}

fn humidex(_variant: ToolboxVariant, args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(formulas::humidex(args.number(0)?, args.number(1)?)))
}

fn beaufort_index(_variant: ToolboxVariant, args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(formulas::beaufort_index(args.number(0)?)))
}

fn bearing_to_compass16(variant: ToolboxVariant, args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(formulas::bearing_to_compass(
        args.number(0)?,
        CompassRose::Sixteen,
        variant.compass_sentinel(),
    )))
}

fn bearing_to_compass8(variant: ToolboxVariant, args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(formulas::bearing_to_compass(
        args.number(0)?,
        CompassRose::Eight,
        variant.compass_sentinel(),
    )))
}

fn sea_level_pressure(_variant: ToolboxVariant, args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(formulas::sea_level_pressure(
        args.number(0)?,
        args.number(1)?,
        args.number(2)?,
    )))
}

fn angle_difference(_variant: ToolboxVariant, args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(formulas::angle_difference(args.number(0)?, args.number(1)?)))
}

fn sager_pressure_trend(_variant: ToolboxVariant, args: &Args<'_>) -> Result<Value> {
    let trend = formulas::sager_pressure_trend(args.number(0)?, args.number(1)?);
    Ok(Value::from(trend.level()))
}

fn sager_pressure_level(_variant: ToolboxVariant, args: &Args<'_>) -> Result<Value> {
    Ok(Value::from(formulas::sager_pressure_level(args.number(0)?)))
}

fn sager_cloud_level(_variant: ToolboxVariant, args: &Args<'_>) -> Result<Value> {
    let level = formulas::sager_cloud_level(args.integer(0)?, args.flag(1)?);
    Ok(Value::from(level.level()))
}

const GREAT_CIRCLE_DISTANCE: ToolboxFunction = ToolboxFunction {
    doc: ActionDoc {
        name: "great_circle_distance",
        text: "Compute the distance between two points",
        returns: "distance between the two points in meters",
        params: &[
            number("point_a_latitude"),
            number("point_a_longitude"),
            number("point_b_latitude"),
            number("point_b_longitude"),
        ],
    },
    handler: great_circle_distance,
};

const HUMIDEX: ToolboxFunction = ToolboxFunction {
    doc: ActionDoc {
        name: "humidex",
        text: "Compute the Humidex index given temperature and hygrometry",
        returns: "Humidex index value",
        params: &[number("temperature"), number("relative_humidity")],
    },
    handler: humidex,
};

const BEAUFORT_INDEX: ToolboxFunction = ToolboxFunction {
    doc: ActionDoc {
        name: "beaufort_index",
        text: "Compute the Beaufort scale for a given wind speed",
        returns: "Beaufort index between 0 and 12",
        params: &[number("wind_speed")],
    },
    handler: beaufort_index,
};

const BEARING_TO_COMPASS16: ToolboxFunction = ToolboxFunction {
    doc: ActionDoc {
        name: "bearing_to_compass16",
        text: "Transform an orientation angle to its 16-point cardinal string equivalent",
        returns: "String representing the direction",
        params: &[number("bearing")],
    },
    handler: bearing_to_compass16,
};

const BEARING_TO_COMPASS8: ToolboxFunction = ToolboxFunction {
    doc: ActionDoc {
        name: "bearing_to_compass8",
        text: "Transform an orientation angle to its 8-point cardinal string equivalent",
        returns: "String representing the direction",
        params: &[number("bearing")],
    },
    handler: bearing_to_compass8,
};

const SEA_LEVEL_PRESSURE: ToolboxFunction = ToolboxFunction {
    doc: ActionDoc {
        name: "sea_level_pressure",
        text: "Compute the Sea Level Pressure",
        returns: "Equivalent sea level pressure",
        params: &[
            number("absolute_pressure_hpa"),
            number("temperature"),
            number("altitude_m"),
        ],
    },
    handler: sea_level_pressure,
};

const ANGLE_DIFFERENCE: ToolboxFunction = ToolboxFunction {
    doc: ActionDoc {
        name: "angle_difference",
        text: "Compute the difference between two bearings",
        returns: "Angle difference",
        params: &[number("first_bearing"), number("second_bearing")],
    },
    handler: angle_difference,
};

const SAGER_PRESSURE_TREND: ToolboxFunction = ToolboxFunction {
    doc: ActionDoc {
        name: "sager_pressure_trend",
        text: "Set pressure evolution trend according to Sager Algorithm",
        returns: "Number representing pressure trend",
        params: &[number("current_pressure"), number("past_pressure")],
    },
    handler: sager_pressure_trend,
};

const SAGER_PRESSURE_LEVEL: ToolboxFunction = ToolboxFunction {
    doc: ActionDoc {
        name: "sager_pressure_level",
        text: "Transforms pressure value (hPa) to Sager pressure scales",
        returns: "Sager pressure level",
        params: &[number("current_pressure")],
    },
    handler: sager_pressure_level,
};

const SAGER_CLOUD_LEVEL: ToolboxFunction = ToolboxFunction {
    doc: ActionDoc {
        name: "sager_cloud_level",
        text: "Converts a cloud percentage into Sager scale",
        returns: "Sager cloud level",
        params: &[
            ParamDoc {
                name: "cloud_coverage_pct",
                kind: ParamKind::Integer,
            },
            ParamDoc {
                name: "raining",
                kind: ParamKind::Bool,
            },
        ],
    },
    handler: sager_cloud_level,
};

/// Name-indexed table of the functions available to scripts
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    variant: ToolboxVariant,
    functions: BTreeMap<&'static str, ToolboxFunction>,
}

impl FunctionRegistry {
    /// Build the registry for a formula variant
    ///
    /// The legacy set only ever exposed distance, humidex, Beaufort, the
    /// 16-point compass and sea-level pressure.
    #[must_use]
    pub fn new(variant: ToolboxVariant) -> Self {
        let mut registry = Self {
            variant,
            functions: BTreeMap::new(),
        };

        registry.register(GREAT_CIRCLE_DISTANCE);
        registry.register(HUMIDEX);
        registry.register(BEAUFORT_INDEX);
        registry.register(BEARING_TO_COMPASS16);
        registry.register(SEA_LEVEL_PRESSURE);

        if variant == ToolboxVariant::Standard {
            registry.register(BEARING_TO_COMPASS8);
            registry.register(ANGLE_DIFFERENCE);
            registry.register(SAGER_PRESSURE_TREND);
            registry.register(SAGER_PRESSURE_LEVEL);
            registry.register(SAGER_CLOUD_LEVEL);
        }

        debug!(
            variant = %variant,
            functions = registry.functions.len(),
            "Function registry built"
        );
        registry
    }

    fn register(&mut self, function: ToolboxFunction) {
        self.functions.insert(function.doc.name, function);
    }

    #[must_use]
    pub fn variant(&self) -> ToolboxVariant {
        self.variant
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ToolboxFunction> {
        self.functions.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names in alphabetical order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    /// Documentation of every registered function, ordered by name
    pub fn docs(&self) -> impl Iterator<Item = &ActionDoc> + '_ {
        self.functions.values().map(|f| &f.doc)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Call a function by name with positional arguments
    #[instrument(level = "debug", skip(self, args), fields(variant = %self.variant))]
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value> {
        let function = self
            .get(name)
            .ok_or_else(|| ToolboxError::unknown_function(name))?;

        let bound = Args::new(&function.doc, args)?;
        let result = (function.handler)(self.variant, &bound)?;

        debug!(result = %result, "Function evaluated");
        Ok(result)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new(ToolboxVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_args(doc: &ActionDoc) -> Vec<Value> {
        doc.params
            .iter()
            .map(|p| match p.kind {
                ParamKind::Number => Value::Number(10.0),
                ParamKind::Integer => Value::Integer(10),
                ParamKind::Bool => Value::Bool(false),
            })
            .collect()
    }

    #[test]
    fn test_standard_registry_contents() {
        let registry = FunctionRegistry::new(ToolboxVariant::Standard);
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(
            names,
            vec![
                "angle_difference",
                "beaufort_index",
                "bearing_to_compass16",
                "bearing_to_compass8",
                "great_circle_distance",
                "humidex",
                "sager_cloud_level",
                "sager_pressure_level",
                "sager_pressure_trend",
                "sea_level_pressure",
            ]
        );
        assert_eq!(registry.len(), 10);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_legacy_registry_contents() {
        let registry = FunctionRegistry::new(ToolboxVariant::Legacy);
        assert_eq!(registry.len(), 5);
        assert!(registry.contains("bearing_to_compass16"));
        assert!(!registry.contains("bearing_to_compass8"));
        assert!(!registry.contains("sager_cloud_level"));
    }

    #[test]
    fn test_every_function_accepts_its_documented_parameters() {
        let registry = FunctionRegistry::default();
        for doc in registry.docs() {
            let result = registry.invoke(doc.name, &sample_args(doc));
            assert!(result.is_ok(), "{} failed: {:?}", doc.name, result.err());
        }
    }

    #[test]
    fn test_invoke_matches_direct_calls() {
        let registry = FunctionRegistry::default();

        let humidex = registry
            .invoke("humidex", &[Value::from(30.0), Value::from(70i64)])
            .unwrap();
        assert_eq!(humidex, Value::Number(formulas::humidex(30.0, 70.0)));

        let beaufort = registry.invoke("beaufort_index", &[Value::from(0.3)]).unwrap();
        assert_eq!(beaufort, Value::Integer(1));

        let compass = registry
            .invoke("bearing_to_compass16", &[Value::from(90i64)])
            .unwrap();
        assert_eq!(compass, Value::from("E"));

        let trend = registry
            .invoke("sager_pressure_trend", &[Value::from(1013.0), Value::from(1016.0)])
            .unwrap();
        assert_eq!(trend, Value::Integer(5));

        let cloud = registry
            .invoke("sager_cloud_level", &[Value::from(90i64), Value::from(true)])
            .unwrap();
        assert_eq!(cloud, Value::Integer(5));
    }

    #[test]
    fn test_variant_changes_constants() {
        let args = [
            Value::from(51.5074),
            Value::from(-0.1278),
            Value::from(48.8566),
            Value::from(2.3522),
        ];
        let standard = FunctionRegistry::new(ToolboxVariant::Standard)
            .invoke("great_circle_distance", &args)
            .unwrap()
            .as_f64()
            .unwrap();
        let legacy = FunctionRegistry::new(ToolboxVariant::Legacy)
            .invoke("great_circle_distance", &args)
            .unwrap()
            .as_f64()
            .unwrap();
        assert_relative_eq!(legacy, standard * 10.0, max_relative = 1e-12);

        let sentinel = FunctionRegistry::new(ToolboxVariant::Legacy)
            .invoke("bearing_to_compass16", &[Value::from(400.0)])
            .unwrap();
        assert_eq!(sentinel, Value::from("Unknown"));
    }

    #[test]
    fn test_unknown_function() {
        let registry = FunctionRegistry::default();
        let err = registry.invoke("getDewPoint", &[]).unwrap_err();
        assert!(matches!(err, ToolboxError::UnknownFunction { ref name } if name == "getDewPoint"));
    }

    #[test]
    fn test_wrong_arity() {
        let registry = FunctionRegistry::default();
        let err = registry.invoke("humidex", &[Value::from(20.0)]).unwrap_err();
        assert!(matches!(
            err,
            ToolboxError::Arity {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_argument_type() {
        let registry = FunctionRegistry::default();

        let err = registry
            .invoke("sager_cloud_level", &[Value::from(50.5), Value::from(false)])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "sager_cloud_level: parameter 'cloud_coverage_pct' expects integer, got number"
        );

        let err = registry
            .invoke("beaufort_index", &[Value::from("windy")])
            .unwrap_err();
        assert!(matches!(
            err,
            ToolboxError::ArgumentType { ref parameter, .. } if parameter == "wind_speed"
        ));
    }

    #[test]
    fn test_out_of_range_input_is_not_rejected() {
        let registry = FunctionRegistry::default();
        assert_eq!(
            registry
                .invoke("bearing_to_compass16", &[Value::from(-190.0)])
                .unwrap(),
            Value::from("-")
        );
        assert_eq!(
            registry
                .invoke("sager_cloud_level", &[Value::from(-40i64), Value::from(false)])
                .unwrap(),
            Value::Integer(1)
        );
        assert!(registry
            .invoke("humidex", &[Value::from(25.0), Value::from(250.0)])
            .is_ok());
    }

    #[test]
    fn test_signature() {
        let registry = FunctionRegistry::default();
        let doc = registry.get("sager_cloud_level").unwrap().doc;
        assert_eq!(
            doc.signature(),
            "sager_cloud_level(cloud_coverage_pct: integer, raining: bool)"
        );
    }

    #[test]
    fn test_docs_serialize() {
        let registry = FunctionRegistry::default();
        let doc = registry.get("beaufort_index").unwrap().doc;
        let json = serde_json::to_value(doc).unwrap();
        assert_eq!(json["name"], "beaufort_index");
        assert_eq!(json["params"][0]["kind"], "number");
    }
}
