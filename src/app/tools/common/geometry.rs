//! Rein-mathematische Hilfsfunktionen: Strahl/Ebene, Achsen, Winkel-Snap.

use glam::Vec3;

/// Vorzeichen einer Komponente; exakte Null zählt als +1.
fn sign_or_one(v: f32) -> f32 {
    if v == 0.0 {
        1.0
    } else {
        v.signum()
    }
}

/// Zeigerstrahl in Weltkoordinaten (vom externen Raycaster geliefert).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }
}

/// Ebene in Normalenform: `normal · p + d == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    /// Ebene aus Normale und enthaltenem Punkt.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            d: -normal.dot(point),
        }
    }

    /// Horizontale Ebene auf Höhe `y`.
    pub fn horizontal(y: f32) -> Self {
        Self {
            normal: Vec3::Y,
            d: -y,
        }
    }

    /// Schnittpunkt Strahl/Ebene. `None` bei parallelem Strahl oder
    /// Schnitt hinter dem Strahlursprung.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Vec3> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < 1e-8 {
            return None;
        }
        let t = -(self.normal.dot(ray.origin) + self.d) / denom;
        if t < 0.0 {
            return None;
        }
        Some(ray.origin + ray.direction * t)
    }
}

/// Hauptachse für Push-Pull und Achsensperre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Positive Einheitsachse.
    pub fn unit(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Zeichen für Report/Anzeige.
    pub fn as_char(&self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    /// `true` für die Hochachse.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Axis::Y)
    }
}

/// Rastet eine Flächennormale auf die nächste Hauptachse ein und gibt die
/// vorzeichenbehaftete Einheitsachse zurück.
///
/// Gleichstandsregel bewusst nicht-strikt in der Reihenfolge X, Y, Z:
/// eine Achse gewinnt, wenn ihr Betrag >= beiden anderen ist. Ein Treffer
/// exakt auf einer Würfelkante greift damit deterministisch dieselbe Fläche.
pub fn axis_from_normal(n: Vec3) -> Vec3 {
    let (ax, ay, az) = (n.x.abs(), n.y.abs(), n.z.abs());
    if ax >= ay && ax >= az {
        Vec3::X * sign_or_one(n.x)
    } else if ay >= ax && ay >= az {
        Vec3::Y * sign_or_one(n.y)
    } else {
        Vec3::Z * sign_or_one(n.z)
    }
}

/// Aktive Achse unter Berücksichtigung der Sperre.
///
/// Das Vorzeichen der gesperrten Achse wird aus der angeklickten Normale
/// übernommen; Null-Komponente ergibt +1.
pub fn locked_axis_vector(lock: Option<Axis>, clicked: Vec3) -> Vec3 {
    match lock {
        None => clicked,
        Some(axis) => {
            let unit = axis.unit();
            unit * sign_or_one(clicked.dot(unit))
        }
    }
}

/// Einheitsrichtung in der Bodenebene aus einem Winkel in Grad.
pub fn direction_from_angle_deg(deg: f32) -> Vec3 {
    let rad = deg.to_radians();
    Vec3::new(rad.cos(), 0.0, rad.sin())
}

/// Rundet die Richtung auf das nächste Vielfache des Winkel-Inkrements.
pub fn snap_angle(direction: Vec3, increment_deg: f32) -> Vec3 {
    let current_deg = direction.z.atan2(direction.x).to_degrees();
    let snapped_deg = (current_deg / increment_deg).round() * increment_deg;
    direction_from_angle_deg(snapped_deg)
}
