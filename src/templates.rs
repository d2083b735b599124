//! Static text written to the scaffolded project
//!
//! These are emitted verbatim; Restage has no templating engine and none of
//! these documents contain substituted values.

/// Output file name for the ignore file
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Output file name for the project README
pub const README_FILE: &str = "README.md";

/// Output path for the technical documentation, relative to the base path
pub const TECHNICAL_FILE: &str = "docs/TECHNICAL.md";

pub const GITIGNORE: &str = r"# Dependencies
node_modules/
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Build output
dist/
build/
.vercel/

# OS files
.DS_Store
Thumbs.db

# IDE files
.vscode/
.idea/
*.swp
*.swo

# Environment files
.env
.env.local
.env.production

# Temporary files
*.tmp
*.temp
";

pub const README: &str = r#"# AIMLAB Wireless XR

An interactive AR experience combining hand tracking with immersive augmented reality.

## 🚀 Features

- **Hand Tracking**: Natural hand gesture interactions
- **AR Passthrough**: See-through AR experience on compatible devices
- **Interactive Objects**: Pinchable and manipulable 3D objects
- **Planet System**: Animated solar system visualization
- **Control Panel**: Interactive UI elements in 3D space

## 🛠️ Technology Stack

- **A-Frame**: WebVR/AR framework
- **WebXR API**: Modern AR/VR web standard
- **Three.js**: 3D graphics (via A-Frame)

## 📁 Project Structure

```
aimlab-xr-wireless/
├── index.html          # Main application file
├── public/             # Static assets
│   ├── assets/        # General assets
│   ├── models/        # 3D models (GLTF)
│   ├── textures/      # Texture files
│   └── audio/         # Sound files
├── src/               # Source code
│   ├── components/    # A-Frame components
│   ├── utils/         # Utility functions
│   └── styles/        # CSS styles
├── docs/              # Documentation
├── package.json       # Project configuration
└── vercel.json        # Vercel deployment config
```

## 🚀 Quick Start

1. **Clone the repository**
   ```bash
   git clone https://github.com/yourusername/aimlab-xr-wireless
   cd aimlab-xr-wireless
   ```

2. **Install dependencies** (optional, for development server)
   ```bash
   npm install
   ```

3. **Run development server**
   ```bash
   npm run dev
   ```

4. **Open in browser**
   Navigate to `http://localhost:3000`

## 📱 AR Mode

To experience AR mode:
1. Open on a WebXR-compatible device (e.g., Meta Quest, Android with ARCore)
2. Click "Enter AR Mode" button
3. Use hand gestures to interact with objects

## 🎮 Controls

- **Pinch**: Grab and move objects
- **Point**: Interact with buttons
- **Look**: Gaze-based cursor control (fallback)

## 🌐 Deployment

### Deploy to Vercel

[![Deploy with Vercel](https://vercel.com/button)](https://vercel.com/new/clone?repository-url=https://github.com/yourusername/aimlab-xr-wireless)

Or manually:

```bash
npm i -g vercel
vercel
```

## 🤝 Contributing

Contributions are welcome! Please feel free to submit a Pull Request.

## 📄 License

This project is licensed under the MIT License.

## 👨‍💻 Author

**Pi Ko**
Email: [pi.ko@nyu.edu](mailto:pi.ko@nyu.edu)

## 🙏 Acknowledgments

- A-Frame community for the excellent WebXR framework
- WebXR samples for reference implementations
- NYU Abu Dhabi for campus tour example code
"#;

pub const TECHNICAL_DOC: &str = r"# Technical Documentation - AIMLAB XR Wireless

## Architecture Overview

The application uses a component-based architecture built on A-Frame, which abstracts WebXR APIs for easier development.

## Key Components

### 1. AR Session Manager
- Handles WebXR session initialization
- Manages AR/VR mode transitions
- Controls passthrough visibility

### 2. Interactive Components
- **interactive-button**: Touch-enabled 3D buttons
- **pinchable**: Hand-tracking grab interactions
- **planet-system**: Animated celestial bodies
- **aimlab-title**: 3D title animation

## WebXR Features Used

- `immersive-ar`: AR session mode
- `hand-tracking`: Hand pose detection
- `dom-overlay`: UI overlay in AR
- `hit-test`: Surface detection (future feature)
- `anchors`: Persistent AR anchors (future feature)

## Performance Considerations

1. **Texture Optimization**: Use compressed textures for better performance
2. **Model Complexity**: Keep polygon counts reasonable
3. **Update Loops**: Minimize per-frame calculations

## Browser Compatibility

- Chrome 79+ (Android)
- Edge 79+ (Windows Mixed Reality)
- Firefox Reality
- Oculus Browser
- Safari (WebXR Viewer app)

## Security Considerations

- HTTPS required for WebXR
- Permissions needed: Camera, Motion sensors
- CORS headers configured for asset loading
";
